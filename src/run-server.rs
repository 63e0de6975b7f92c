use bevy::{log::LogPlugin, prelude::*};
use clap::Parser;

use hex_bush_groups::{
    common::{
        components::interactable::InteractableId,
        plugins::hex_index::HexIndexPlugin,
        region::DEFAULT_MAX_VISITS,
    },
    server::{
        plugins::grouping::{GroupingPlugin, GroupingSet},
        resources::grouping::GroupingSettings,
        systems::{
            diagnostics::{report_groups, GroupTracker},
            spawner::{scatter_interactables, FieldRng, FieldSettings},
        },
    },
};

/// Headless server that scatters interactables and groups touching bushes each tick
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the field generator
    #[arg(long, default_value_t = 7)]
    seed: u64,
    /// Scatter radius around the origin, in tiles
    #[arg(long, default_value_t = 20)]
    radius: u8,
    /// Interactables placed per fixed tick
    #[arg(long, default_value_t = 12)]
    per_tick: usize,
    /// Fixed ticks to simulate before exiting
    #[arg(long, default_value_t = 50)]
    ticks: u32,
    /// Tile budget of a single group search
    #[arg(long, default_value_t = DEFAULT_MAX_VISITS)]
    max_visits: usize,
    /// Chance that a placed interactable is a bush
    #[arg(long, default_value_t = 0.6)]
    bush_ratio: f64,
}

fn main() -> AppExit {
    let args = Args::parse();

    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        LogPlugin {
            level: bevy::log::Level::TRACE,
            filter:  "bevy=warn,".to_owned()
                    +"hex_bush_groups=info,"
                    +"hex_bush_groups::server::resources::grouping=info,"
                    ,
            ..default()
        },
        HexIndexPlugin,
        GroupingPlugin,
    ));

    app.insert_resource(GroupingSettings {
        target: InteractableId::Bush,
        max_visits: args.max_visits,
    });
    app.insert_resource(FieldSettings {
        radius: args.radius,
        per_tick: args.per_tick,
        bush_ratio: args.bush_ratio,
    });
    app.insert_resource(FieldRng::seeded(args.seed));
    app.insert_resource(GroupTracker::with_limit(args.ticks));

    app.add_systems(FixedUpdate, (
        scatter_interactables.before(GroupingSet),
        report_groups.after(GroupingSet),
    ));

    info!("scattering {} interactables per tick within {} tiles (seed {})", args.per_tick, args.radius, args.seed);
    app.run()
}
