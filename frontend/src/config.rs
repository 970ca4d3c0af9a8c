pub struct Config {
    pub site_name: &'static str,
    pub event_year: u16,
    /// How long the simulated registration submission takes.
    pub submit_delay_ms: u32,
    /// Vertical offset past which the navigation bar switches to its scrolled style.
    pub scroll_threshold: f64,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            site_name: "SamosaTech",
            event_year: 2024,
            submit_delay_ms: 1000,
            scroll_threshold: 50.0,
        }
    }
}

pub const CONFIG: Config = Config::new();
