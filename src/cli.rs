use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "yardproof")]
#[command(about = "Bounce house layout planner - match upload photos to the catalog and render virtual layouts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a photo folder, match every file and render its layout
    Run {
        /// Folder of uploaded product photos
        #[arg(required = true)]
        folder: PathBuf,

        /// Product catalog JSON (default: config, then ./products.json)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Output folder for layout PNGs (default: the photo folder)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Canvas width in px
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in px
        #[arg(long)]
        height: Option<u32>,

        /// Font file for the renderer
        #[arg(long)]
        font: Option<PathBuf>,

        /// Reprocess files already in the gallery
        #[arg(long)]
        no_cache: bool,

        /// Scan subfolders too
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// Match one filename against the catalog and print the result
    Match {
        /// Filename to match (the name string, the file need not exist)
        #[arg(required = true)]
        filename: String,

        /// Product catalog JSON (default: config, then ./products.json)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Write the result JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the virtual layout for a product by name
    Render {
        /// Product name (fuzzy-matched against the catalog)
        #[arg(required = true)]
        name: String,

        /// Product catalog JSON (default: config, then ./products.json)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Output folder (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Canvas width in px
        #[arg(long)]
        width: Option<u32>,

        /// Canvas height in px
        #[arg(long)]
        height: Option<u32>,

        /// Font file for the renderer
        #[arg(long)]
        font: Option<PathBuf>,
    },

    /// List catalog products that fit a yard
    Fit {
        /// Yard length in feet
        #[arg(required = true)]
        length: f64,

        /// Yard width in feet
        #[arg(required = true)]
        width: f64,

        /// Product catalog JSON (default: config, then ./products.json)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Show or clear the processed-uploads gallery
    Gallery {
        /// Target folder (default: current directory)
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// Delete the gallery file
        #[arg(long)]
        clear: bool,

        /// Show gallery info
        #[arg(long)]
        info: bool,
    },

    /// Show or edit settings
    Config {
        /// Set the renderer font file
        #[arg(long)]
        set_font: Option<PathBuf>,

        /// Set the default catalog path
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set the default canvas size, e.g. 2000x1000
        #[arg(long)]
        set_canvas: Option<CanvasSize>,

        /// Show current settings
        #[arg(long)]
        show: bool,
    },
}

/// Canvas size argument in `WIDTHxHEIGHT` form
#[derive(Clone, Copy, Debug)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl std::str::FromStr for CanvasSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        let (w, h) = lower
            .split_once('x')
            .ok_or_else(|| format!("Invalid canvas size: {}. Use WIDTHxHEIGHT, e.g. 2000x1000", s))?;
        let width = w
            .trim()
            .parse()
            .map_err(|_| format!("Invalid canvas width: {}", w))?;
        let height = h
            .trim()
            .parse()
            .map_err(|_| format!("Invalid canvas height: {}", h))?;
        Ok(CanvasSize { width, height })
    }
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
