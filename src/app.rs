use std::path::{Path, PathBuf};

use clap::Parser;
use cprimaze::{dims::Pos, Maze, MazeError};
use thiserror::Error;

use crate::{
    files::{self, FileError, Format},
    renderer::{self, ConsoleStyle},
    settings::{Settings, SettingsError},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(String),
    #[error("Nothing to do, use --size to generate a maze or --import to load one")]
    NoMaze,
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    File(#[from] FileError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "primaze")]
pub struct Args {
    #[clap(
        long,
        value_name = "ROWS,COLS",
        value_delimiter = ',',
        help = "Generate a maze of this size"
    )]
    pub size: Option<Vec<usize>>,
    #[clap(long, help = "Seed of the generated maze")]
    pub seed: Option<u64>,
    #[clap(
        long,
        value_name = "START_ROW,START_COL,END_ROW,END_COL",
        value_delimiter = ',',
        allow_hyphen_values = true,
        help = "Find the route between two cells"
    )]
    pub solve: Option<Vec<i32>>,
    #[clap(long, value_name = "FILE", help = "Load a maze from a .png image or a text file")]
    pub import: Option<PathBuf>,
    #[clap(long, value_name = "NAME", help = "Base name of the output files")]
    pub filename: Option<String>,
    #[clap(long, action, help = "Print the maze to the console")]
    pub console: bool,
    #[clap(long, action, requires = "filename", help = "Save the maze to NAME.txt")]
    pub text: bool,
    #[clap(long, action, requires = "filename", help = "Save the maze to NAME.png")]
    pub image: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeat for more")]
    pub verbose: u8,
    #[clap(long, value_name = "FILE", help = "Use this settings file")]
    pub config: Option<PathBuf>,
    #[clap(long, action, help = "Reset config to default and quit")]
    pub reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    pub show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    pub debug_config: bool,
}

impl Args {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Settings::default_path)
    }
}

/// Where the maze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Generate { rows: usize, cols: usize, seed: u64 },
    Import(PathBuf),
}

/// Everything a single run does, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub source: Source,
    pub solve: Option<(Pos, Pos)>,
    pub console: bool,
    pub text: Option<PathBuf>,
    pub image: Option<PathBuf>,
}

impl Job {
    pub fn from_args(args: &Args, settings: &Settings) -> Result<Self, AppError> {
        let source = match (&args.import, &args.size) {
            (Some(path), size) => {
                if size.is_some() {
                    log::warn!("Both --import and --size given, importing {:?}", path);
                }
                Source::Import(path.clone())
            }
            (None, Some(size)) => {
                let (rows, cols) = parse_size(size)?;
                Source::Generate {
                    rows,
                    cols,
                    seed: args.seed.unwrap_or_else(|| settings.get_default_seed()),
                }
            }
            (None, None) => return Err(AppError::NoMaze),
        };

        let solve = args.solve.as_deref().map(parse_solve).transpose()?;

        let output = |enabled: bool, ext: &str| {
            args.filename
                .as_ref()
                .filter(|_| enabled)
                .map(|name| PathBuf::from(format!("{}.{}", name, ext)))
        };

        Ok(Job {
            source,
            solve,
            console: args.console,
            text: output(args.text, "txt"),
            image: output(args.image, "png"),
        })
    }
}

pub fn parse_size(values: &[usize]) -> Result<(usize, usize), AppError> {
    match *values {
        [rows, cols] => Ok((rows, cols)),
        _ => Err(AppError::Config(format!(
            "Size must be given as 'rows,cols', got {} values",
            values.len()
        ))),
    }
}

pub fn parse_solve(values: &[i32]) -> Result<(Pos, Pos), AppError> {
    match *values {
        [start_row, start_col, end_row, end_col] => {
            Ok((Pos(start_row, start_col), Pos(end_row, end_col)))
        }
        _ => Err(AppError::Config(format!(
            "Solve coordinates must be given as 'start_row,start_col,end_row,end_col', got {} values",
            values.len()
        ))),
    }
}

fn import(path: &Path, settings: &Settings) -> Result<Maze, AppError> {
    let grid = match Format::from_path(path) {
        Format::Png => files::png::import(path, settings.get_cell_size())?,
        Format::Text => files::text::import(path)?,
    };
    Ok(Maze::from_grid(grid))
}

/// Builds the maze, solves it and writes out everything the job asks for.
pub fn run(job: &Job, settings: &Settings) -> Result<Maze, AppError> {
    let mut maze = match &job.source {
        Source::Generate { rows, cols, seed } => {
            let mut maze = Maze::new(*rows, *cols, *seed);
            maze.generate();
            maze
        }
        Source::Import(path) => import(path, settings)?,
    };

    if let Some((start, end)) = job.solve {
        if maze.solve(start, end)?.is_none() {
            log::warn!("Maze has no route between {} and {}", start, end);
        }
    }

    if job.console {
        renderer::print(&maze, &ConsoleStyle::from_settings(settings));
    }

    if let Some(path) = &job.text {
        files::text::export(maze.grid(), path)?;
    }

    if let Some(path) = &job.image {
        files::png::export(
            &maze,
            path,
            settings.get_cell_size(),
            settings.get_path_color(),
        )?;
    }

    Ok(maze)
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    fn args(cmd: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("primaze").chain(cmd.iter().copied())).unwrap()
    }

    #[test]
    fn generate_job() {
        let settings = Settings::default();
        let job = Job::from_args(
            &args(&["--size", "15,15", "--solve", "1,1,15,15", "--console"]),
            &settings,
        )
        .unwrap();

        assert_eq!(
            job,
            Job {
                source: Source::Generate {
                    rows: 15,
                    cols: 15,
                    seed: 63
                },
                solve: Some((Pos(1, 1), Pos(15, 15))),
                console: true,
                text: None,
                image: None,
            }
        );
    }

    #[test]
    fn output_names() {
        let job = Job::from_args(
            &args(&["--size", "3,3", "--seed", "5", "--filename", "out", "--text", "--image"]),
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(job.text, Some(PathBuf::from("out.txt")));
        assert_eq!(job.image, Some(PathBuf::from("out.png")));
        assert!(matches!(job.source, Source::Generate { seed: 5, .. }));

        // files need a name
        assert!(Args::try_parse_from(["primaze", "--size", "3,3", "--text"]).is_err());
    }

    #[test]
    fn malformed_arguments() {
        let settings = Settings::default();

        assert!(matches!(
            Job::from_args(&args(&["--size", "3,3,3"]), &settings),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            Job::from_args(&args(&["--size", "3,3", "--solve", "1,1,3"]), &settings),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            Job::from_args(&args(&[]), &settings),
            Err(AppError::NoMaze)
        ));
        assert!(Args::try_parse_from(["primaze", "--size", "a,3"]).is_err());
    }

    #[test]
    fn negative_coordinates_are_out_of_range() {
        let job = Job::from_args(
            &args(&["--size", "3,3", "--solve", "-1,1,3,3"]),
            &Settings::default(),
        )
        .unwrap();

        assert!(matches!(
            run(&job, &Settings::default()),
            Err(AppError::Maze(MazeError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn export_then_import() {
        let base = env::temp_dir().join(format!("primaze-app-{}", process::id()));
        let name = base.to_string_lossy().into_owned();
        let settings = Settings::default().set_cell_size(2);

        let job = Job::from_args(
            &args(&["--size", "7,9", "--filename", name.as_str(), "--text", "--image"]),
            &settings,
        )
        .unwrap();
        let generated = run(&job, &settings).unwrap();

        for ext in ["txt", "png"] {
            let path = PathBuf::from(format!("{}.{}", name, ext));
            let job = Job {
                source: Source::Import(path.clone()),
                solve: Some((Pos(1, 1), Pos(7, 9))),
                console: false,
                text: None,
                image: None,
            };

            let imported = run(&job, &settings).unwrap();
            assert_eq!(imported.grid(), generated.grid(), "{:?}", path);
            assert!(imported.path().is_some());

            let _ = fs::remove_file(&path);
        }
    }
}
