use crate::error::CliError;

/// Write `content` to `path`, or to stdout when no path is given.
pub fn emit(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, content)?,
        None => println!("{content}"),
    }
    Ok(())
}
