use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gasplan_lib::{
    equivalent_air_depth, equivalent_narcotic_depth, estimated_bottom_time,
    maximum_operating_depth, minimum_gas, BlendPlan, Method, TankCatalog, WaterType,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Diving gas-planning calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate Minimum Gas.
    #[command(name = "min_gas")]
    MinGas {
        /// Depth in feet.
        depth: f64,
        /// Gas switch depth in feet (default: surface).
        #[arg(default_value_t = 0.0)]
        switch_depth: f64,
    },
    /// Calculate Maximum Operating Depth (MOD).
    Mod {
        /// Fraction of oxygen (e.g. 0.32).
        f_o2: f64,
        /// PPO2 limit in ATA.
        #[arg(long, default_value_t = 1.4)]
        ppo2: f64,
        /// Water type.
        #[arg(long, default_value = "salt", value_parser = ["salt", "fresh"])]
        water: String,
    },
    /// Calculate Equivalent Narcotic Depth (END).
    End {
        /// Depth in feet.
        depth: f64,
        /// Fraction of helium (e.g. 0.35).
        f_he: f64,
        /// Water type.
        #[arg(long, default_value = "salt", value_parser = ["salt", "fresh"])]
        water: String,
    },
    /// Calculate Equivalent Air Depth (EAD).
    Ead {
        /// Depth in feet.
        depth: f64,
        /// Fraction of oxygen (e.g. 0.32).
        f_o2: f64,
        /// Water type.
        #[arg(long, default_value = "salt", value_parser = ["salt", "fresh"])]
        water: String,
    },
    /// Show tank specifications.
    Tank {
        /// Name of the tank (e.g. 2xAL80).
        tank_name: String,
    },
    /// List all registered tanks.
    Tanks,
    /// Print a trimix partial-pressure fill plan.
    Blend {
        /// Target fraction of oxygen (e.g. 0.18).
        f_o2: f64,
        /// Target fraction of helium (e.g. 0.45).
        f_he: f64,
        /// Fill pressure in PSI.
        #[arg(long, default_value_t = 3000.0)]
        pressure: f64,
    },
    /// Estimate available bottom time for a tank at depth.
    #[command(name = "bottom_time")]
    BottomTime {
        /// Depth in feet.
        depth: f64,
        /// Name of the tank (e.g. 2xAL80).
        tank_name: String,
        /// Usable-gas partition method: all, half or thirds.
        #[arg(long, default_value = "all")]
        method: String,
        /// Surface consumption rate in cf/min.
        #[arg(long, default_value_t = 1.5)]
        scr: f64,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::MinGas {
            depth,
            switch_depth,
        } => handle_min_gas(depth, switch_depth),
        Command::Mod { f_o2, ppo2, water } => handle_mod(f_o2, ppo2, &water),
        Command::End { depth, f_he, water } => handle_end(depth, f_he, &water),
        Command::Ead { depth, f_o2, water } => handle_ead(depth, f_o2, &water),
        Command::Tank { tank_name } => handle_tank(&tank_name),
        Command::Tanks => handle_tanks(),
        Command::Blend {
            f_o2,
            f_he,
            pressure,
        } => handle_blend(f_o2, f_he, pressure),
        Command::BottomTime {
            depth,
            tank_name,
            method,
            scr,
        } => handle_bottom_time(depth, &tank_name, &method, scr),
    }
}

fn handle_min_gas(depth: f64, switch_depth: f64) -> Result<()> {
    let mg = minimum_gas(
        depth,
        switch_depth,
        gasplan_lib::constants::DEFAULT_CONSUMPTION_RATE,
    );
    let switch_note = if switch_depth > 0.0 {
        format!(" with switch at {switch_depth}ft")
    } else {
        String::new()
    };
    println!("Minimum Gas for {depth}ft{switch_note}: {mg} cf");
    Ok(())
}

fn handle_mod(f_o2: f64, ppo2: f64, water: &str) -> Result<()> {
    let water_type = WaterType::from_name(water);
    let mod_ft = maximum_operating_depth(f_o2, ppo2, water_type);
    println!(
        "MOD for {}% O2 @ {ppo2} PPO2 ({water_type}): {mod_ft} ft",
        (f_o2 * 100.0) as i32
    );
    Ok(())
}

fn handle_end(depth: f64, f_he: f64, water: &str) -> Result<()> {
    let water_type = WaterType::from_name(water);
    let end_ft = equivalent_narcotic_depth(depth, f_he, water_type);
    println!(
        "END for {depth}ft with {}% He ({water_type}): {end_ft} ft",
        (f_he * 100.0) as i32
    );
    Ok(())
}

fn handle_ead(depth: f64, f_o2: f64, water: &str) -> Result<()> {
    let water_type = WaterType::from_name(water);
    let ead_ft = equivalent_air_depth(depth, f_o2, water_type);
    println!(
        "EAD for {depth}ft with {}% O2 ({water_type}): {ead_ft} ft",
        (f_o2 * 100.0) as i32
    );
    Ok(())
}

fn handle_tank(tank_name: &str) -> Result<()> {
    let catalog = TankCatalog::builtin();
    let Some(tank) = catalog.get(tank_name) else {
        println!(
            "Error: Tank '{tank_name}' not found. Available tanks: {}",
            catalog.tank_names().join(", ")
        );
        std::process::exit(1);
    };

    println!("Tank: {}", tank.name);
    println!("  Rated Volume: {} cf", tank.rated_volume);
    println!("  Rated Pressure: {} psi", tank.rated_pressure);
    println!("  Tank Factor: {} cf/100psi", tank.tank_factor());
    Ok(())
}

fn handle_tanks() -> Result<()> {
    let catalog = TankCatalog::builtin();
    let tanks = catalog.tanks_sorted();
    println!("Available tanks ({}):", tanks.len());
    for tank in tanks {
        println!(
            "- {}: {} cf @ {} psi (TF {})",
            tank.name,
            tank.rated_volume,
            tank.rated_pressure,
            tank.tank_factor()
        );
    }
    Ok(())
}

fn handle_blend(f_o2: f64, f_he: f64, pressure: f64) -> Result<()> {
    let plan = BlendPlan::compute(f_o2, f_he, pressure);
    println!("{plan}");
    Ok(())
}

fn handle_bottom_time(depth: f64, tank_name: &str, method: &str, scr: f64) -> Result<()> {
    let method = Method::from_str(method)?;
    let minutes = estimated_bottom_time(depth, tank_name, method, scr)?;
    println!("Estimated bottom time for {tank_name} at {depth}ft: {minutes:.1} min");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
