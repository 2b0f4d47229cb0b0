use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::fs;
use std::io::Write;
use std::path::Path;

use periodica::{best_match, render, Catalog, Molecule, RankOptions, SortMode};

mod cli;
use cli::display::{row, search_row, section_bot, section_top, themed, truncate, BOLD, CYAN, GRAY};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    // Only fails if a logger is already installed
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Search {
            query,
            sort,
            limit,
            only_matches,
        } => {
            run_search(&catalog, &query, sort, limit, only_matches);
            Ok(())
        }
        Commands::Render {
            id,
            width,
            height,
            output,
        } => {
            let molecule = catalog.require(&id)?;
            run_render(molecule, width, height, output.as_deref())
        }
        Commands::Show { id } => {
            show_molecule(catalog.require(&id)?);
            Ok(())
        }
    }
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Catalog::builtin().context("parsing built-in catalog"),
    }
}

fn run_search(catalog: &Catalog, query: &str, sort: SortMode, limit: usize, only_matches: bool) {
    let options = RankOptions {
        sort,
        only_matches,
        limit: Some(limit),
    };
    let results = catalog.search(query, &options);

    let query = periodica::normalize_query(query);
    let heading = if query.is_empty() {
        "MOLECULES".to_string()
    } else {
        format!("RESULTS FOR \"{}\"", query)
    };

    section_top(&heading);
    if results.is_empty() {
        row(&themed(GRAY, &[], "  No molecules found"));
    }
    for (position, ranked) in results.iter().enumerate() {
        let molecule = ranked.item;
        let tier = best_match(query, molecule).map(|m| m.tier);
        row(&search_row(
            position + 1,
            ranked.score,
            tier,
            &molecule.name,
            &molecule.formula,
        ));
    }
    section_bot();
}

fn run_render(
    molecule: &Molecule,
    width: f64,
    height: f64,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let scene = render(molecule, width, height);
    let svg = periodica::render::svg::to_svg(&scene, &periodica::RenderStyle::default());
    log::debug!(
        "{}: {} primitives on {}x{}",
        molecule.id,
        scene.len(),
        scene.width,
        scene.height
    );

    match output {
        Some(path) => {
            fs::write(path, &svg).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("✓ wrote {} ({} bytes)", path.display(), svg.len());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn show_molecule(molecule: &Molecule) {
    section_top(&molecule.name.to_uppercase());
    row(&format!("  Id:       {}", molecule.id));
    row(&format!("  Formula:  {}", themed(CYAN, &[BOLD], &molecule.formula)));
    if let Some(url) = molecule.wiki_url() {
        row(&format!("  Wiki:     {}", truncate(&url, 58)));
    }
    row(&format!(
        "  Atoms:    {:<6} Bonds: {}",
        molecule.atoms.len(),
        molecule.bonds.len()
    ));
    row("");
    for (index, atom) in molecule.atoms.iter().enumerate() {
        row(&format!(
            "  {:>3}  {:<3} {:>8.3} {:>8.3}",
            index,
            atom.element,
            atom.x(),
            atom.y()
        ));
    }
    if !molecule.bonds.is_empty() {
        row("");
        let pairs: Vec<String> = molecule
            .bonds
            .iter()
            .map(|b| format!("{}-{}", b.from, b.to))
            .collect();
        for chunk in pairs.chunks(10) {
            row(&format!("  {}", chunk.join(" ")));
        }
    }
    section_bot();
}
