pub struct StatsSettings {
    /// How many controversial films a member report shows
    pub controversial_limit: usize,
    /// How wide the films table renders titles
    pub title_width: usize,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            controversial_limit: 4,
            title_width: 34,
        }
    }
}

pub struct DataSettings {
    /// Directory holding films.json and members.json
    pub data_dir: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
        }
    }
}

pub struct AppConfig {
    pub stats: StatsSettings,
    pub data: DataSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            stats: StatsSettings::default(),
            data: DataSettings::default(),
        }
    }

    pub fn with_data_dir(data_dir: &str) -> Self {
        Self {
            data: DataSettings {
                data_dir: data_dir.to_string(),
            },
            ..Self::new()
        }
    }
}
