//! Soaring forecast from a surface observation
//!
//! Run with: `cargo run --example cloud_base`

use velitherm_core::{adiabatic_cooling, pressure_from_standard_altitude, AirSample, GAMMA};

fn main() -> Result<(), velitherm_core::ThermoError> {
    // Early afternoon at a 300m airfield: 27°C, dew point 11°C, 978 hPa
    let surface = AirSample::from_dew_point(27.0, 978.0, 11.0);
    surface.validate()?;

    println!("=== Surface ===");
    println!("Temperature:       {:.1} °C", surface.temp);
    println!("Relative humidity: {:.0} %", surface.relative_humidity);
    println!("Density:           {:.3} kg/m³", surface.density());
    println!("Mixing ratio:      {:.2} g/kg", surface.mixing_ratio());
    println!("Pressure altitude: {:.0} m (FL{:.0})", surface.pressure_altitude(), surface.flight_level());

    let base = surface.cloud_base();
    let base_msl = surface.pressure_altitude() + base;
    let base_pressure = pressure_from_standard_altitude(base_msl, velitherm_core::P0);
    let base_temp = adiabatic_cooling(surface.temp, base_pressure, surface.pressure);

    println!();
    println!("=== Cumulus base ===");
    println!("Height above ground: {:.0} m", base);
    println!("Parcel temperature:  {:.1} °C", base_temp);
    println!(
        "Dry lapse check:     {:.2} °C/100m (nominal {:.2})",
        (surface.temp - base_temp) / base * 100.0,
        GAMMA * 100.0
    );

    let cloud = AirSample::new(base_temp, base_pressure, 100.0);
    println!("Moist lapse rate:    {:.2} °C/100m", cloud.gamma_moist() * 100.0);

    Ok(())
}
