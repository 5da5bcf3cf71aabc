use std::io::Write;

use clap::Parser;
use mazewalls::{
    config::{OutputFormat, Settings},
    generators::generate_maze,
    logging,
    render::{TextRenderer, wall_segments},
};

fn main() -> anyhow::Result<()> {
    let settings = Settings::parse();
    let _guard = logging::init(settings.log_file.as_deref(), settings.log_level())?;
    tracing::info!("[cli] starting with {:?}", settings);

    let maze = generate_maze(settings.width, settings.height, settings.seed)?;
    tracing::info!(
        "[cli] generated {}x{} maze with {} passages",
        maze.width(),
        maze.height(),
        maze.passages().count()
    );

    let mut stdout = std::io::stdout().lock();
    match settings.format {
        OutputFormat::Text => TextRenderer::new(settings.hallway_size).render(&maze, &mut stdout)?,
        OutputFormat::Segments => {
            for segment in wall_segments(&maze, f32::from(settings.hallway_size)) {
                writeln!(stdout, "{segment}")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}
