pub const FIRST_NAME_REQUIRED_ERROR: &str = "First name is required";
pub const LAST_NAME_REQUIRED_ERROR: &str = "Last name is required";
pub const EMAIL_REQUIRED_ERROR: &str = "Email is required";
pub const INVALID_EMAIL_ERROR: &str = "Please enter a valid email address";
pub const DATE_OF_BIRTH_REQUIRED_ERROR: &str = "Date of Birth is required";
pub const TERMS_REQUIRED_ERROR: &str = "Please accept the Sweepstakes Rules and Terms of Use";

pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

// Simulated submission latency before the record is handed to the wheel
pub const SUBMIT_DELAY_MS: u32 = 1000;

// Allowed drift between the catalog weight sum and 1.0
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

pub const CATALOG_GLOBAL: &str = "PRIZE_WHEEL_CATALOG";
