//! torviz - spinning ASCII torus for the terminal.
//!
//! Press `q`, `Esc`, or `Ctrl+C` to quit.

use torviz::app::App;
use torviz::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load_or_default(
        dirs::config_dir().map(|p| p.join("torviz/config.yaml")).unwrap_or_default(),
    );

    // Run the application
    let mut app = App::new(config)?;
    app.run()?;

    Ok(())
}
