use anyhow::{bail, Context, Result};
use clap::Parser;

use feedboard::cli::{parse_tab_reference, CliArgs, Command};
use feedboard::{BoardConfig, JsonFileStore, LayoutEngine, LayoutStateStore, PanelRegistry};

fn main() -> Result<()> {
    feedboard::tracing::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => BoardConfig::load_from(path),
        None => BoardConfig::load(),
    };
    let store = match &args.state {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::default_location()
            .context("No config directory available, pass --state <PATH>")?,
    };
    let override_tabs = args.open.as_deref().map(parse_tab_reference);

    let mut engine = LayoutEngine::boot(
        PanelRegistry::social_feed(),
        config,
        store,
        override_tabs.as_deref(),
    );
    engine.container_resized(Some(args.width));
    engine.frame();

    match args.command.unwrap_or(Command::Show) {
        Command::Show => {}
        Command::Toggle { name } => {
            ensure_known(&engine, &name)?;
            engine.toggle(&name);
        }
        Command::Reorder { names } => {
            for name in &names {
                ensure_known(&engine, name)?;
            }
            engine.reorder(names);
        }
        Command::Move { name, offset } => {
            ensure_known(&engine, &name)?;
            engine.move_tab(&name, offset);
        }
        Command::Resize { name, delta } => {
            ensure_known(&engine, &name)?;
            if engine.width_of(&name).is_none() {
                bail!("Panel '{}' is not visible, toggle it on first", name);
            }
            engine.start_drag(&name, 0.0);
            engine.drag_to(delta);
            engine.end_drag();
        }
        Command::ResetPanel { name } => {
            ensure_known(&engine, &name)?;
            engine.reset_panel(&name);
        }
        Command::Reset => engine.reset(),
    }
    engine.frame();

    print_strip(&engine, args.width);
    println!("state: {}", engine.store().path().display());
    Ok(())
}

fn ensure_known<S: LayoutStateStore>(engine: &LayoutEngine<S>, name: &str) -> Result<()> {
    if !engine.model().registry.contains(name) {
        let known = engine.model().registry.names().join(", ");
        bail!("Unknown panel '{}' (known panels: {})", name, known);
    }
    Ok(())
}

fn print_strip<S: LayoutStateStore>(engine: &LayoutEngine<S>, container_width: f32) {
    let model = engine.model();

    let tabs: Vec<String> = engine
        .tab_bar()
        .into_iter()
        .map(|tab| {
            if tab.active {
                format!("[{}]", tab.title)
            } else {
                tab.title
            }
        })
        .collect();
    println!("tabs: {}", tabs.join(" "));

    let distribution = engine.widths();
    for width in &distribution.widths {
        println!(
            "  {:<14} {:>7.0}px  {} col{}  {}",
            width.name,
            width.width,
            width.columns,
            if width.columns == 1 { "" } else { "s" },
            if width.pinned { "pinned" } else { "auto" },
        );
    }

    println!(
        "total: {:.0}px of {:.0}px{}",
        distribution.total_width(&model.config),
        container_width,
        if distribution.degraded { " (overflow, scrolling)" } else { "" }
    );
}
