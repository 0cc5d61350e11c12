use anyhow::Context;
use freightplan::{init_logging, Application, Config, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("freightplan {} (built {})", VERSION, BUILD_DATE);

    let app = match Config::default_config_path() {
        Some(path) => Application::from_config_path(&path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => {
            tracing::warn!("No configuration directory; using default settings");
            Application::new(Config::default())
        }
    };

    if let Some(editor) = app.plans.active_editor() {
        tracing::info!(
            "Editing '{}' ({} floor(s), zoom {:.2}x)",
            editor.plan().name(),
            editor.plan().floor_count(),
            editor.zoom()
        );
    }

    Ok(())
}
