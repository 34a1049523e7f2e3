use super::{PlotError, PlotResult};
use std::path::Path;
use std::process::Command;
use tracing::info;

/// Shows a saved chart to the user, kept apart from saving so headless runs can skip it
pub trait Viewer {
    fn show(&self, image: &Path) -> PlotResult<()>;
}

/// Opens the image with the desktop's default application and waits for the launcher to exit
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

/// Does nothing, for --no-show and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NoViewer;

impl SystemViewer {
    fn command(image: &Path) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(&["/C", "start", "/WAIT", ""]).arg(image);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg("-W").arg(image);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(image);
            cmd
        }
    }
}

impl Viewer for SystemViewer {
    fn show(&self, image: &Path) -> PlotResult<()> {
        if !image.exists() {
            return Err(PlotError::Viewer(format!(
                "nothing to show, {} does not exist",
                image.display()
            )));
        }
        info!("opening {}", image.display());
        let status = Self::command(image)
            .spawn()
            .map_err(|e| PlotError::Viewer(format!("could not start viewer: {}", e)))?
            .wait()?;
        if !status.success() {
            return Err(PlotError::Viewer(format!(
                "viewer exited with status {}",
                status
            )));
        }
        Ok(())
    }
}

impl Viewer for NoViewer {
    fn show(&self, _image: &Path) -> PlotResult<()> {
        Ok(())
    }
}

/// viewer for the binaries' --no-show flag
pub fn viewer_for(show: bool) -> Box<dyn Viewer> {
    if show {
        Box::new(SystemViewer)
    } else {
        Box::new(NoViewer)
    }
}
