extern crate satenv;

use satenv::atmosphere::exponential::VALLADO_LAYERS;
use satenv::atmosphere::nrlmsise00::Nrlmsise00;
use satenv::atmosphere::{AtmosphereModel, ExponentialAtmosphere};
use satenv::space_indices::ConstantIndices;
use satenv::time::Epoch;

use rstest::*;

#[fixture]
fn models() -> Vec<Box<dyn AtmosphereModel>> {
    if pretty_env_logger::try_init().is_err() {
        println!("could not init env_logger");
    }
    vec![
        Box::new(ExponentialAtmosphere::default()),
        Box::new(Nrlmsise00::new(ConstantIndices::default())),
    ]
}

#[rstest]
fn exponential_vs_nrlmsise(models: Vec<Box<dyn AtmosphereModel>>) {
    let epoch = Epoch::from_gregorian_utc_at_noon(2006, 4, 2);
    for altitude_km in [0.0, 50.0, 200.0, 400.0, 800.0] {
        let densities = models
            .iter()
            .map(|model| model.density(epoch, 0.2, 0.5, altitude_km * 1e3).unwrap())
            .collect::<Vec<_>>();
        println!("{altitude_km} km: {densities:?}");
        // Both models agree within an order of magnitude
        let ratio = densities[0] / densities[1];
        assert!(ratio > 0.1 && ratio < 10.0, "{altitude_km} km: ratio {ratio}");
    }
    assert!(!models[0].requires_space_weather());
    assert!(models[1].requires_space_weather());
}

#[test]
fn vallado_table_layers() {
    let atm = ExponentialAtmosphere::default();
    assert_eq!(atm.layers(), &VALLADO_LAYERS[..]);
    // Each layer extrapolates close to the base density of the next one
    for pair in VALLADO_LAYERS.windows(2) {
        let rho = atm.density_at(pair[1].base_km * 1e3 - 1e-3).unwrap();
        assert!(
            (rho / pair[1].rho0 - 1.0).abs() < 1e-2,
            "{} km: {rho} vs {}",
            pair[1].base_km,
            pair[1].rho0
        );
    }
}

#[test]
fn layers_from_yaml() {
    let atm = ExponentialAtmosphere::load(crate::test_data("exponential_layers.yaml")).unwrap();
    assert_eq!(atm.layers().len(), 4);
    let epoch = Epoch::from_gregorian_utc_at_midnight(2020, 1, 1);
    let rho = atm.density(epoch, 0.0, 0.0, 458_515.0).unwrap();
    assert!((rho / (3.725e-12 * (-1.0_f64).exp()) - 1.0).abs() < 1e-12);
    // Nothing above the last layer base
    assert_eq!(atm.density_at(1001e3).unwrap(), 0.0);

    assert!(ExponentialAtmosphere::load(crate::test_data("nope.yaml")).is_err());
}
