/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`; field `database_url` reads
/// `DATABASE_URL`, and so on. Call `dotenvy::dotenv()` first if a `.env`
/// file should be honored.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}
