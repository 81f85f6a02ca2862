use chrono::{Local, SecondsFormat, Utc};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use yardproof::cli::{Cli, Commands};
use yardproof::config::Config;
use yardproof::error::{Result, YardproofError};
use yardproof::gallery::{compute_file_hash, filter_cached_images, GalleryEntry, GalleryFile};
use yardproof::render::{FontSet, RenderOptions};
use yardproof::{catalog, export, matcher, render, scanner};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Run {
            folder,
            catalog: catalog_path,
            output,
            width,
            height,
            font,
            no_cache,
            recursive,
        } => {
            println!("🏠 yardproof - batch layout generation\n");

            let products = load_products(catalog_path.as_deref(), &config)?;
            println!("- Catalog: {} products\n", products.len());
            let options = render_options(&config, width, height);

            // 1. Scan uploads
            println!("[1/3] Scanning photos...");
            let images = scanner::scan_folder(&folder, recursive)?;
            println!("✔ {} photo(s) found\n", images.len());

            if images.is_empty() {
                return Err(YardproofError::NoImagesFound(
                    folder.display().to_string(),
                ));
            }

            // 2. Gallery lookup
            println!("[2/3] Checking gallery...{}", if no_cache { " (disabled)" } else { "" });
            let mut gallery = if no_cache {
                GalleryFile::default()
            } else {
                GalleryFile::load(&folder)
            };
            let (cached, pending) = if no_cache {
                (Vec::new(), images.iter().map(|i| (i, String::new())).collect())
            } else {
                filter_cached_images(&images, &gallery)
            };
            println!("✔ {} cached, {} to process\n", cached.len(), pending.len());

            // 3. Match + render, in file-name order
            println!("[3/3] Generating layouts...");
            let fonts = FontSet::load(font.as_deref().or(config.font_path.as_deref()))?;
            let output_dir = output.unwrap_or_else(|| folder.clone());
            let today = Local::now().date_naive();

            let progress = ProgressBar::new(pending.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            let mut processed = 0usize;
            let mut skipped = 0usize;
            for (image, hash) in pending {
                progress.set_message(image.file_name.clone());

                if let Some(reason) = scanner::validate_upload(image) {
                    progress.println(format!("⚠ {reason}"));
                    skipped += 1;
                    progress.inc(1);
                    continue;
                }

                let result = matcher::match_product(&image.file_name, &products)?;
                let layout = render::generate_virtual_layout(
                    &result.product,
                    &options,
                    &fonts,
                    today,
                )?;
                let written = export::write_layout(&layout, &output_dir)?;

                if cli.verbose {
                    progress.println(format!(
                        "✔ {} → {} [{}] (score {:.2}) → {}",
                        image.file_name,
                        result.product.name,
                        result.match_confidence,
                        result.match_score,
                        written.display()
                    ));
                } else {
                    progress.println(format!(
                        "✔ {} → {} [{}]",
                        image.file_name, result.product.name, result.match_confidence
                    ));
                }

                let hash = if hash.is_empty() {
                    compute_file_hash(&image.path)?
                } else {
                    hash
                };
                gallery.insert(
                    hash,
                    GalleryEntry::new(
                        image.file_name.clone(),
                        image.file_size,
                        result,
                        &layout.png,
                        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                    ),
                );
                processed += 1;
                progress.inc(1);
            }
            progress.finish_and_clear();

            if !no_cache {
                gallery.save(&folder)?;
            }

            println!(
                "\n✅ Done: {} generated, {} cached, {} skipped",
                processed,
                cached.len(),
                skipped
            );
        }

        Commands::Match {
            filename,
            catalog: catalog_path,
            output,
        } => {
            let products = load_products(catalog_path.as_deref(), &config)?;
            let result = matcher::match_product(&filename, &products)?;

            let json = serde_json::to_string_pretty(&result)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("✔ Result saved: {}", path.display());
                }
                None => println!("{json}"),
            }
        }

        Commands::Render {
            name,
            catalog: catalog_path,
            output,
            width,
            height,
            font,
        } => {
            println!("🎨 yardproof - layout render\n");

            let products = load_products(catalog_path.as_deref(), &config)?;
            let options = render_options(&config, width, height);

            let result = matcher::match_product(&name, &products)?;
            println!(
                "- Matched: {} [{}] ({})",
                result.product.name, result.match_confidence, result.match_reason
            );

            let fonts = FontSet::load(font.as_deref().or(config.font_path.as_deref()))?;
            let layout = render::generate_virtual_layout(
                &result.product,
                &options,
                &fonts,
                Local::now().date_naive(),
            )?;

            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            let written = export::write_layout(&layout, &output_dir)?;
            println!("✔ Layout saved: {}", written.display());
        }

        Commands::Fit {
            length,
            width,
            catalog: catalog_path,
        } => {
            let products = load_products(catalog_path.as_deref(), &config)?;
            let fitting = catalog::find_fitting(&products, length, width);

            println!(
                "Yard: {}' × {}' ({} sq ft)\n",
                length,
                width,
                length * width
            );

            if fitting.is_empty() {
                println!(
                    "No products fit a {}' × {}' yard. Try larger dimensions.",
                    length, width
                );
            } else {
                println!("{} product(s) fit:\n", fitting.len());
                for fit in fitting {
                    println!(
                        "  {} - setup {}, {} sq ft required, uses {:.0}% of yard",
                        fit.product.name,
                        fit.product.setup_area.dimension_label(),
                        fit.product.setup_area.sq_ft,
                        fit.percent_used
                    );
                }
            }
        }

        Commands::Gallery {
            folder,
            clear,
            info,
        } => {
            let target = folder.unwrap_or_else(|| PathBuf::from("."));
            let gallery_path = GalleryFile::gallery_path(&target);

            if info || !clear {
                if gallery_path.exists() {
                    let gallery = GalleryFile::load(&target);
                    println!("Gallery info:");
                    println!("  Path: {}", gallery_path.display());
                    println!("  Entries: {}", gallery.len());
                    if let Ok(meta) = std::fs::metadata(&gallery_path) {
                        println!("  Size: {} bytes", meta.len());
                    }
                } else {
                    println!("No gallery file at: {}", gallery_path.display());
                }
            }

            if clear {
                match GalleryFile::clear(&target) {
                    Ok(true) => println!("✔ Gallery cleared: {}", gallery_path.display()),
                    Ok(false) => println!("No gallery file to clear"),
                    Err(e) => println!("Gallery clear error: {}", e),
                }
            }
        }

        Commands::Config {
            set_font,
            set_catalog,
            set_canvas,
            show,
        } => {
            let mut config = config;
            let mut changed = false;

            if let Some(font) = set_font {
                config.font_path = Some(font);
                changed = true;
            }
            if let Some(catalog_path) = set_catalog {
                config.catalog_path = Some(catalog_path);
                changed = true;
            }
            if let Some(canvas) = set_canvas {
                config.canvas_width = canvas.width;
                config.canvas_height = canvas.height;
                changed = true;
            }
            if changed {
                config.save()?;
                println!("✔ Settings saved");
            }

            if show || !changed {
                println!("Settings:");
                println!(
                    "  Canvas: {}x{}",
                    config.canvas_width, config.canvas_height
                );
                println!(
                    "  Font: {}",
                    config
                        .font_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(system search)".to_string())
                );
                println!(
                    "  Catalog: {}",
                    config
                        .catalog_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(./products.json)".to_string())
                );
            }
        }
    }

    Ok(())
}

/// Catalog resolution: CLI flag, then config, then ./products.json
fn load_products(arg: Option<&Path>, config: &Config) -> Result<Vec<catalog::Product>> {
    let path = arg
        .map(Path::to_path_buf)
        .or_else(|| config.catalog_path.clone())
        .unwrap_or_else(|| PathBuf::from("products.json"));

    let products = catalog::load_catalog(&path)?;
    if products.is_empty() {
        return Err(YardproofError::EmptyCatalog);
    }
    Ok(products)
}

fn render_options(config: &Config, width: Option<u32>, height: Option<u32>) -> RenderOptions {
    RenderOptions {
        canvas_width: width.unwrap_or(config.canvas_width),
        canvas_height: height.unwrap_or(config.canvas_height),
    }
}
