mod atmosphere;
mod space_indices;

use std::path::PathBuf;

use satenv::space_indices::SpaceWeatherTable;

pub fn test_data(name: &str) -> PathBuf {
    let manifest_dir =
        PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or(".".to_string()));
    manifest_dir.join("data").join(name)
}

pub fn test_space_weather() -> SpaceWeatherTable {
    SpaceWeatherTable::load(test_data("sample_space_weather.yaml")).unwrap()
}
