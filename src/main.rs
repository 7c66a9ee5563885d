use mysql_slowlog::error::Result;
use mysql_slowlog::process;
use std::io;

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    mysql_slowlog::logging::init_default_logging()?;

    // 唯一的可选参数：慢日志文件路径，缺省读标准输入；事件总是写到标准输出
    let input = std::env::args().nth(1);
    process::run_input(input, io::stdout().lock())?;
    Ok(())
}
