//! 行分类器与条目组装的集成测试

mod common;

use chrono::{TimeZone, Utc};
use common::{PERCONA_ENTRY, RDS_CONTENT, SINGLE_ENTRY, feed_lines};
use mysql_slowlog::slowlog::{AttributeValue, Event, SlowlogParser};

#[test]
fn test_parse_single_event() {
    let (events, flushed) = feed_lines(SINGLE_ENTRY);
    assert_eq!(events.len(), 1);
    assert!(flushed.is_none());

    let mut expected = Event::new();
    expected.insert("User", "rdsadmin");
    expected.insert("Host", "localhost");
    expected.insert("IP", "127.0.0.1");
    expected.insert("Database", "foo");
    expected.insert("Query_time", 0.020363);
    expected.insert("Lock_time", 0.018450);
    expected.insert("Rows_sent", 0i64);
    expected.insert("Rows_examined", 1i64);
    expected.insert("Timestamp", Utc.timestamp_opt(1514083320, 0).unwrap());
    expected.insert("Statement", "SELECT 1;");

    assert_eq!(events[0], expected);
}

#[test]
fn test_single_event_json() {
    let (events, _) = feed_lines(SINGLE_ENTRY);
    let json = serde_json::to_value(&events[0]).unwrap();

    assert_eq!(json["User"], "rdsadmin");
    assert_eq!(json["Rows_examined"], 1);
    assert_eq!(json["Query_time"], 0.020363);
    assert_eq!(json["Timestamp"], "2017-12-24T02:42:00Z");
    assert_eq!(json["Statement"], "SELECT 1;");
    assert!(json.get("Time").is_none());
}

#[test]
fn test_rds_stream_with_rollover() {
    let (events, flushed) = feed_lines(RDS_CONTENT);
    assert_eq!(events.len(), 2);
    let last = flushed.expect("final entry needs an explicit flush");

    let first = &events[0];
    assert_eq!(first.database(), Some("mysql"));
    assert!(first.statement().starts_with("SELECT count(*) from mysql.rds_replication_status"));
    assert!(first.statement().ends_with("LIMIT 1;"));
    assert!(!first.statement().contains("started with:"));
    assert!(!first.statement().contains("Tcp port"));

    let second = &events[1];
    assert_eq!(second.user(), Some("app"));
    assert_eq!(second.host(), Some("10.0.1.17"));
    assert_eq!(second.get("IP"), Some(&AttributeValue::Str("10.0.1.17".into())));
    assert_eq!(second.database(), None);
    assert_eq!(
        second.statement(),
        "SELECT o.id, o.total\nFROM orders o\nWHERE o.created_at > '2017-12-01'\nORDER BY o.total DESC;"
    );
    assert_eq!(second.get("Rows_examined"), Some(&AttributeValue::Int(98213)));

    assert_eq!(last.host(), Some("web-02"));
    assert!(!last.contains_key("IP"));
    assert_eq!(last.timestamp(), Utc.timestamp_opt(1514083450, 0).single());
    assert!(last.statement().starts_with("UPDATE orders"));
}

#[test]
fn test_percona_extended_attributes() {
    let (events, flushed) = feed_lines(PERCONA_ENTRY);
    assert!(events.is_empty());
    let event = flushed.unwrap();

    assert_eq!(event.len(), 33);
    assert_eq!(event.get("Schema"), Some(&AttributeValue::Str("shop".into())));
    assert_eq!(event.get("Killed"), Some(&AttributeValue::Int(0)));
    assert_eq!(event.get("Query_time"), Some(&AttributeValue::Float(2.5)));
    assert_eq!(event.get("Rows_affected"), Some(&AttributeValue::Int(0)));
    assert_eq!(event.get("Bytes_sent"), Some(&AttributeValue::Int(1234)));
    assert_eq!(event.get("InnoDB_trx_id"), Some(&AttributeValue::Str("1A2B3C".into())));
    assert_eq!(event.get("QC_Hit"), Some(&AttributeValue::Bool(false)));
    assert_eq!(event.get("Full_scan"), Some(&AttributeValue::Bool(true)));
    assert_eq!(event.get("Filesort"), Some(&AttributeValue::Bool(true)));
    assert_eq!(event.get("InnoDB_IO_r_bytes"), Some(&AttributeValue::Int(196608)));
    assert_eq!(event.get("InnoDB_IO_r_wait"), Some(&AttributeValue::Float(0.001234)));
    assert_eq!(event.get("InnoDB_pages_distinct"), Some(&AttributeValue::Int(8)));
    assert_eq!(event.database(), Some("shop"));
    assert_eq!(event.timestamp(), Utc.timestamp_opt(1551694272, 0).single());
    assert_eq!(event.statement(), "SELECT * FROM orders\nWHERE status = 'open';");
}

#[test]
fn test_boundary_correctness() {
    let mut log = String::new();
    for i in 0..5 {
        log.push_str(&format!("# Query_time: 0.{i}  Lock_time: 0.0 Rows_sent: {i}  Rows_examined: {i}\n"));
        log.push_str(&format!("SELECT {i};\n"));
    }
    log.push_str("#\n");

    let mut parser = SlowlogParser::new();
    let events: Vec<Event> = log
        .split_inclusive('\n')
        .filter_map(|line| parser.consume_line(line))
        .collect();

    assert_eq!(events.len(), 5);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.statement(), format!("SELECT {i};"));
        assert_eq!(event.get("Rows_sent"), Some(&AttributeValue::Int(i as i64)));
    }
    assert!(parser.flush().is_none());
}

#[test]
fn test_flush_necessity() {
    let log = "# Query_time: 0.1  Lock_time: 0.0 Rows_sent: 1  Rows_examined: 1\nSELECT 1;\n";
    let (events, flushed) = feed_lines(log);
    assert!(events.is_empty());
    assert_eq!(flushed.unwrap().statement(), "SELECT 1;");
}

#[test]
fn test_bad_values_are_dropped() {
    let log = "# User@Host: root[root] @ localhost []  Id: 1
# Query_time: fast  Lock_time: 0.5 Rows_sent: -  Rows_examined: 1e3
# QC_Hit: Yes  Full_scan: No  Filesort: 1
# Some_future_metric: 12
SET timestamp=yesterday;
use ;
SELECT 1;
";
    let (_, flushed) = feed_lines(log);
    let event = flushed.unwrap();

    assert_eq!(event.get("Lock_time"), Some(&AttributeValue::Float(0.5)));
    assert_eq!(event.get("Filesort"), Some(&AttributeValue::Bool(true)));
    for key in [
        "Query_time",
        "Rows_sent",
        "Rows_examined",
        "QC_Hit",
        "Full_scan",
        "Some_future_metric",
        "Timestamp",
        "Database",
        "IP",
    ] {
        assert!(!event.contains_key(key), "unexpected key {key}");
    }
    assert_eq!(event.statement(), "SELECT 1;");
}

#[test]
fn test_every_event_has_statement() {
    let log = "# Query_time: 0.1\n\n# Query_time: 0.2\nSET timestamp=1514083320;\n# Query_time: 0.3\n   \n";
    let (mut events, flushed) = feed_lines(log);
    events.extend(flushed);

    assert_eq!(events.len(), 3);
    for event in &events {
        assert_eq!(event.get("Statement"), Some(&AttributeValue::Str(String::new())));
    }
    assert!(events[1].timestamp().is_some());
}

#[test]
fn test_crlf_line_endings() {
    let log = SINGLE_ENTRY.replace('\n', "\r\n");
    let (events, _) = feed_lines(&log);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].database(), Some("foo"));
    assert_eq!(events[0].statement(), "SELECT 1;");
    assert_eq!(events[0].get("IP"), Some(&AttributeValue::Str("127.0.0.1".into())));
}

#[test]
fn test_percona_empty_schema() {
    let log = "# User@Host: app[app] @ localhost []  Id: 9
# Thread_id: 7  Schema:   Last_errno: 0  Killed: 0
# Query_time: 0.5  Lock_time: 0.0  Rows_sent: 1  Rows_examined: 1
SELECT 1;
";
    let (_, flushed) = feed_lines(log);
    let event = flushed.unwrap();

    assert!(!event.contains_key("Schema"));
    assert_eq!(event.get("Thread_id"), Some(&AttributeValue::Int(7)));
    assert_eq!(event.get("Last_errno"), Some(&AttributeValue::Int(0)));
    assert_eq!(event.get("Killed"), Some(&AttributeValue::Int(0)));
}
