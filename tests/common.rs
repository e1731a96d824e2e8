use geocalc::errors::Result;
use geocalc::input::Reader;
use geocalc::session::{History, Session};
use std::io::Cursor;

/// Helper function to run a whole session against scripted input, returning
/// the final history and everything written to the console
pub fn run_session(input: &str) -> Result<(History, String)> {
    let mut out = Vec::new();
    let reader = Reader::new(Cursor::new(input.as_bytes()), &mut out);
    let history = Session::new(reader).run()?;

    Ok((history, String::from_utf8_lossy(&out).to_string()))
}

/// Helper function to join script lines into newline-terminated input
#[allow(dead_code)]
pub fn script(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
