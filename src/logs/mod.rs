use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use env_logger::fmt::Color;

use crate::{config::LoggingSettings, utils::get_path};

use self::dual_writer::DualWriter;

mod dual_writer;

/// Next free `YYYY-MM-DD-N.log` name inside `dir`.
fn next_log_file(dir: &Path, day: &str) -> PathBuf {
    let mut log_file = 1;

    // Check if log file already exists.
    while dir.join(format!("{}-{}.log", day, log_file)).exists() {
        log_file += 1;
    }

    dir.join(format!("{}-{}.log", day, log_file))
}

pub fn get_log_path(settings: &LoggingSettings) -> anyhow::Result<Option<PathBuf>> {
    match settings.save_as.as_str() {
        "file" => Ok(Some(get_path(&settings.path)?)),
        "dir" => {
            let dir = get_path(&settings.path)?;
            let yyyy_mm_dd = chrono::Local::now().format("%Y-%m-%d").to_string();
            Ok(Some(next_log_file(&dir, &yyyy_mm_dd)))
        }
        "none" | "" => Ok(None),
        other => anyhow::bail!("unknown logging.save_as value {other:?}"),
    }
}

pub fn get_log_file(settings: &LoggingSettings) -> anyhow::Result<Option<File>> {
    let Some(file_path) = get_log_path(settings)? else {
        return Ok(None);
    };

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(&file_path)
        .with_context(|| format!("failed to create log file {}", file_path.display()))?;
    Ok(Some(file))
}

pub fn stdout_target() -> Box<dyn io::Write + Send> {
    Box::new(io::stdout())
}

pub fn setup_logger(settings: &LoggingSettings) -> anyhow::Result<()> {
    let mut logger = env_logger::Builder::new();
    logger
        .parse_filters(&settings.level)
        .parse_default_env()
        .format(|buf, record| {
            // Time color.
            let mut time_style = buf.style();
            time_style.set_color(Color::Cyan);

            // Get color for level.
            let level_style = buf.default_level_style(record.level());

            // Get color for target.
            let mut target_style = buf.style();
            target_style.set_color(Color::Magenta);

            writeln!(
                buf,
                "[{}] {} {} - {}",
                time_style.value(chrono::Local::now().format("%Y-%m-%d %H:%M:%S")),
                level_style.value(record.level()),
                target_style.value(record.target()),
                record.args()
            )
        });

    // Check if we should save logs to a file.
    if let Some(file) = get_log_file(settings)? {
        let pipe: Box<dyn io::Write + Send> =
            DualWriter::new(Box::new(file), stdout_target()).into();
        logger.target(env_logger::Target::Pipe(pipe));
    }

    logger.try_init().context("logger already initialized")
}
