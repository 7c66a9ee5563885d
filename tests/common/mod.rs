//! 集成测试公共模块

use mysql_slowlog::slowlog::{Event, SlowlogParser};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// 在临时目录中写入测试用的慢日志文件
#[allow(dead_code)]
pub fn create_test_slowlog(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).expect("Failed to write test file");
    file_path
}

/// 逐行喂给解析器，返回 (逐行产出的事件, flush 产出的事件)
#[allow(dead_code)]
pub fn feed_lines(content: &str) -> (Vec<Event>, Option<Event>) {
    let mut parser = SlowlogParser::new();
    let events = content
        .split_inclusive('\n')
        .filter_map(|line| parser.consume_line(line))
        .collect();
    (events, parser.flush())
}

/// 单条 RDS 条目，以一行 `#` 收尾
#[allow(dead_code)]
pub const SINGLE_ENTRY: &str = "# Time: 2017-12-24T02:42:00.126000Z
# User@Host: rdsadmin[rdsadmin] @ localhost [127.0.0.1]  Id:     3
# Query_time: 0.020363  Lock_time: 0.018450 Rows_sent: 0  Rows_examined: 1
SET timestamp=1514083320;
use foo;
SELECT 1;
#
";

/// RDS 导出的慢日志片段，开头有服务端横幅，中间有一次日志轮转
#[allow(dead_code)]
pub const RDS_CONTENT: &str = "/rdsdbbin/mysql/bin/mysqld, Version: 5.7.19-log (MySQL Community Server (GPL)). started with:
Tcp port: 3306  Unix socket: /tmp/mysql.sock
Time                 Id Command    Argument
# Time: 2017-12-24T02:42:00.126000Z
# User@Host: rdsadmin[rdsadmin] @ localhost [127.0.0.1]  Id:     3
# Query_time: 0.020363  Lock_time: 0.018450 Rows_sent: 0  Rows_examined: 1
SET timestamp=1514083320;
use mysql;
SELECT count(*) from mysql.rds_replication_status WHERE master_host IS NOT NULL and master_port IS NOT NULL GROUP BY action_timestamp,called_by_user,action,mysql_version,master_host,master_port ORDER BY action_timestamp LIMIT 1;
/rdsdbbin/mysql/bin/mysqld, Version: 5.7.19-log (MySQL Community Server (GPL)). started with:
Tcp port: 3306  Unix socket: /tmp/mysql.sock
Time                 Id Command    Argument
# Time: 2017-12-24T02:43:00.006000Z
# User@Host: app[app] @  [10.0.1.17]  Id:    51
# Query_time: 1.204711  Lock_time: 0.000091 Rows_sent: 120  Rows_examined: 98213
SET timestamp=1514083380;
SELECT o.id, o.total
FROM orders o
WHERE o.created_at > '2017-12-01'
ORDER BY o.total DESC;
# Time: 2017-12-24T02:44:10.512000Z
# User@Host: app[app] @ web-02 []  Id:    52
# Query_time: 0.731002  Lock_time: 0.000120 Rows_sent: 0  Rows_examined: 40211
SET timestamp=1514083450;
UPDATE orders SET status = 'closed' WHERE created_at < '2017-01-01';
";

/// Percona 扩展格式的单条条目，没有结尾的 `#` 行
#[allow(dead_code)]
pub const PERCONA_ENTRY: &str = "# Time: 2019-03-04T10:11:12.123456Z
# User@Host: shop[shop] @ app-01 [10.1.2.3]  Id:    42
# Schema: shop  Last_errno: 0  Killed: 0
# Query_time: 2.500000  Lock_time: 0.000100  Rows_sent: 10  Rows_examined: 50000  Rows_affected: 0
# Bytes_sent: 1234  Tmp_tables: 1  Tmp_disk_tables: 0  Tmp_table_sizes: 0
# InnoDB_trx_id: 1A2B3C
# QC_Hit: false  Full_scan: true  Full_join: false  Tmp_table: true  Tmp_table_on_disk: false
# Filesort: true  Filesort_on_disk: false  Merge_passes: 0
#   InnoDB_IO_r_ops: 12  InnoDB_IO_r_bytes: 196608  InnoDB_IO_r_wait: 0.001234
#   InnoDB_rec_lock_wait: 0.000000  InnoDB_queue_wait: 0.000000
#   InnoDB_pages_distinct: 8
use shop;
SET timestamp=1551694272;
SELECT * FROM orders
WHERE status = 'open';
";
