use dashcheck_app::verifier::DashboardVerifier;
use dashcheck_common::observability::{LogConfig, init_logging};
use dashcheck_config::VerifyConfigLoader;

#[tokio::main]
async fn main() {
    // Logging failures must not stop a smoke check.
    if let Err(e) = init_logging(LogConfig::default()) {
        eprintln!("logging setup failed: {e}");
    }

    let config = match VerifyConfigLoader::new().with_file("dashcheck.yaml").load() {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {e}");
            return;
        }
    };

    DashboardVerifier::new(config).verify().await;
}
