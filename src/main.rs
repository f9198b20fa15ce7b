use chrono::Local;

use orrery::orrery::Orrery;
use orrery::orrery_errors::OrreryError;

/// Prints today's heliocentric ecliptic longitude of each catalog planet, one
/// line per body, in catalog order. Any lookup or date error aborts the run.
fn main() -> Result<(), OrreryError> {
    let orrery = Orrery::new();
    let today = Local::now().format("%m/%d/%Y").to_string();

    for (name, _) in orrery.iter() {
        let position = orrery.position_at(name, &today)?;
        println!("{}: {}", name, position);
    }

    Ok(())
}
