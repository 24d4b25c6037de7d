use std::env;

#[derive(Clone)]
pub struct Config {
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            db_user: env::var("APP_DB_USERNAME").unwrap_or_default(),
            db_password: env::var("APP_DB_PASSWORD").unwrap_or_default(),
            db_name: env::var("APP_DB_NAME").unwrap_or_else(|_| "exercises.db".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8010".to_string())
                .parse()
                .unwrap_or(8010),
        })
    }

    pub fn connection_string(&self) -> String {
        format!(
            "user={} password={} dbname={} sslmode=disable",
            self.db_user, self.db_password, self.db_name
        )
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
