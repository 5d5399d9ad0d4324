/// Constants module to avoid magic numbers in the codebase

// Directory Configuration
pub const DEFAULT_DIRECTORY_URL: &str = "http://localhost:5000";
pub const DEFAULT_TOKEN_ENV: &str = "RUTABOT_TOKEN";
pub const ROUTES_PATH: &str = "/api/rutas";
pub const STOPS_PATH: &str = "/api/paradas";
pub const PING_PATH: &str = "/api/ping";

// Timeouts
pub const DIRECTORY_TIMEOUT_MS: u64 = 5000;
pub const PING_TIMEOUT_MS: u64 = 1000;

// Batch mode
pub const DEFAULT_BATCH_CONCURRENCY: usize = 4;

// Config
pub const ENV_PREFIX: &str = "RUTABOT_";
pub const LOCAL_CONFIG_PATH: &str = ".rutabot/config.toml";

// Gazetteer
pub const DEFAULT_CITIES: &[&str] = &[
    "Managua",
    "Estelí",
    "León",
    "Matagalpa",
    "Chinandega",
    "Masaya",
    "Jinotega",
    "Rivas",
    "Granada",
];

// Intent keywords
pub const ROUTE_KEYWORDS: &[&str] = &["ruta", "ir"];
pub const SCHEDULE_KEYWORDS: &[&str] = &["horario", "salida"];
pub const STOP_KEYWORDS: &[&str] = &["parada"];

// Responses
pub const FALLBACK_RESPONSE: &str = "Lo siento, no tengo datos suficientes para esa consulta.";
pub const HOURS_SEPARATOR: &str = " y ";

// Chat loop commands
pub const CMD_EXIT: &str = "/salir";
pub const CMD_HISTORY: &str = "/historial";
