use std::path::Path;

use dashcheck_common::{Result, VerifyError};
use dashcheck_config::VerifyConfig;
use dashcheck_drivers::browser::session::BrowserSession;
use tracing::{error, info};

/// Performs one verification pass against a running dashboard and produces
/// visual evidence.
///
/// The pass is a straight-line sequence: acquire a browser session, navigate,
/// wait for the marker, screenshot, release the session. The session is
/// released on every exit path. Failures are printed as `Error: <message>`
/// on stdout and never propagate; the process exit status stays 0.
pub struct DashboardVerifier {
    config: VerifyConfig,
}

impl DashboardVerifier {
    pub fn new(config: VerifyConfig) -> Self {
        Self { config }
    }

    /// Run the verification pass.
    pub async fn verify(&self) {
        let session = match BrowserSession::connect(
            &self.config.webdriver_url,
            self.config.headless,
        )
        .await
        {
            Ok(session) => session,
            Err(e) => {
                report(&e);
                return;
            }
        };

        // Single error boundary around the navigate/wait/screenshot
        // sequence; the close below runs no matter how it ended.
        if let Err(e) = self.run(&session).await {
            report(&e);
        }

        if let Err(e) = session.close().await {
            error!(error = %e, "browser session close failed");
        }
    }

    async fn run(&self, session: &BrowserSession) -> Result<()> {
        println!("Navigating to {}", self.config.address);
        let page = session.open(&self.config.address).await?;

        println!("Waiting for '{}' to be visible", self.config.marker);
        page.wait_for_text(&self.config.marker).await?;
        if let (Ok(title), Ok(url)) = (page.title().await, page.current_url().await) {
            info!(%title, %url, marker = %self.config.marker, "dashboard rendered");
        }

        println!("Taking screenshot");
        let png = page.screenshot_png().await?;
        write_artifact(&self.config.output, &png).await?;
        println!("Screenshot saved to {}", self.config.output.display());
        info!(path = %self.config.output.display(), bytes = png.len(), "artifact written");

        Ok(())
    }
}

/// Write the PNG to `path`, creating the parent directory when missing and
/// overwriting any previous artifact.
async fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| VerifyError::Screenshot(format!("{}: {e}", parent.display())))?;
        }
    }
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| VerifyError::Screenshot(format!("{}: {e}", path.display())))
}

fn report(err: &VerifyError) {
    println!("Error: {err}");
    error!(error = %err, "verification pass failed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn write_artifact_creates_missing_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("verification/dashboard.png");

        write_artifact(&path, b"png-bytes").await.expect("write");

        assert_eq!(std::fs::read(&path).unwrap(), b"png-bytes");
    }

    #[tokio::test]
    async fn write_artifact_overwrites_a_previous_run() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dashboard.png");

        write_artifact(&path, b"first").await.expect("first write");
        write_artifact(&path, b"second").await.expect("second write");

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn write_artifact_reports_unwritable_destination() {
        let tmp = TempDir::new().unwrap();
        // A file where a directory is needed makes the parent uncreatable.
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let path = blocker.join("dashboard.png");

        let err = write_artifact(&path, b"png").await.unwrap_err();
        assert!(matches!(err, VerifyError::Screenshot(_)));
    }

    #[test]
    fn report_formats_like_the_boundary_contract() {
        // The printed line is `Error: <Display of VerifyError>`.
        let err = VerifyError::Navigation("http://localhost:3000/: refused".into());
        assert_eq!(
            format!("Error: {err}"),
            "Error: Navigation error: http://localhost:3000/: refused"
        );
    }
}
