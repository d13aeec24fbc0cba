/**
 * MIT License
 *
 * collectorz-converter - Copyright (c) 2024 collectorz-converter contributors
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */
mod cli;
mod logger;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use collectorzlib::config::config_extra::SettingsVersionedDefaulted;
use collectorzlib::config::{load_settings, Configuration, Settings};
use collectorzlib::export::Exporter;

#[macro_use]
extern crate log;

fn main() -> Result<()> {
    // print error to the log and then throw it
    if let Err(err) = actual_main() {
        error!("Error: {:?}", err);
        return Err(err);
    }

    Ok(())
}

fn actual_main() -> Result<()> {
    let args = cli::Args::parse();
    let _logger = logger::setup(&args.log_options)?;

    if let Some(action) = args.action {
        return execute_action(action);
    }

    let config = get_config(&args)?;
    // clap requires the export file when there is no action
    let Some(export_file) = args.export_file else {
        bail!("no export file given");
    };

    let summary = Exporter::new(&config)
        .with_localization(!args.no_localize)
        .run(&export_file)
        .with_context(|| format!("converting \"{}\"", export_file.display()))?;

    for script in &summary.scripts {
        println!("{}", script.display());
    }
    if !summary.is_success() {
        for failed in &summary.failed {
            warn!("Not exported: {} ({})", failed.title, failed.error);
        }
        bail!("{} media could not be exported", summary.failed.len());
    }

    Ok(())
}

fn get_config(args: &cli::Args) -> Result<Configuration> {
    let mut settings = load_settings(args.config.as_deref()).context("loading config")?;

    if let Some(ref output) = args.output {
        settings.export.export_dir = get_path(output);
    }

    Ok(Configuration::new(settings))
}

/// Make a relative path absolute against the current directory
fn get_path(dir: &std::path::Path) -> PathBuf {
    if dir.has_root() {
        return dir.to_path_buf();
    }

    match std::env::current_dir() {
        Ok(base) => base.join(dir),
        Err(err) => {
            warn!("Could not get the current directory: {err}");
            dir.to_path_buf()
        }
    }
}

fn execute_action(action: cli::Action) -> Result<()> {
    match action {
        cli::Action::DefaultConfig { file } => {
            let path = get_path(&file);
            if path.exists() {
                bail!("\"{}\" already exists, not overwriting it", path.display());
            }
            SettingsVersionedDefaulted::save_file(&path, &Settings::default())
                .with_context(|| format!("writing default config to \"{}\"", path.display()))?;
            println!("Wrote default config to \"{}\"", path.display());
        }
    };

    Ok(())
}
