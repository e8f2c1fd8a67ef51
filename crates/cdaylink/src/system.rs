//! Clipboard and browser access through the platform's own programs.

use crate::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Clipboard programs in lookup order, with the arguments that make them read stdin
const CLIPBOARD_PROGRAMS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip.exe", &[]),
];

/// Locate the first clipboard program available on PATH
fn find_clipboard_program() -> Option<(PathBuf, &'static [&'static str])> {
    CLIPBOARD_PROGRAMS
        .iter()
        .find_map(|(name, args)| which::which(name).ok().map(|path| (path, *args)))
}

/// Write `text` to the system clipboard
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let (program, args) = find_clipboard_program().ok_or_else(|| {
        let tried: Vec<&str> = CLIPBOARD_PROGRAMS.iter().map(|(name, _)| *name).collect();
        Error::ClipboardUnavailable(tried.join(", "))
    })?;

    log::debug!("Copying {} bytes with {}", text.len(), program.display());

    let mut child = Command::new(&program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| f!("Failed to start {}", program.display()))?;

    // Dropping stdin closes the pipe so the program sees EOF.
    {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_eyre("Clipboard program has no stdin")?;
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(Error::Clipboard(f!("{} exited with {status}", program.display())).into());
    }

    Ok(())
}

/// Program and arguments that open `url` in the default browser on `os`
pub fn browser_command(os: &str, url: &str) -> Result<(&'static str, Vec<String>), Error> {
    match os {
        "macos" => Ok(("open", vec![url.to_string()])),
        "linux" | "freebsd" | "netbsd" | "openbsd" | "dragonfly" => {
            Ok(("xdg-open", vec![url.to_string()]))
        }
        // The empty argument is the window title `start` expects first.
        "windows" => Ok((
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )),
        os => Err(Error::UnsupportedPlatform(os.to_string())),
    }
}

/// Open `url` in a new browser window without waiting for it
pub fn open_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(Error::EmptyResult("open").into());
    }

    let (program, args) = browser_command(std::env::consts::OS, url)?;

    log::debug!("Opening {url} with {program}");

    Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| f!("Failed to start {program}"))?;

    Ok(())
}
