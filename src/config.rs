use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub content_collection: String,
    pub progress_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "aisim-local".to_string()),
            content_collection: env::var("CONTENT_COLLECTION")
                .unwrap_or_else(|_| "content".to_string()),
            progress_collection: env::var("PROGRESS_COLLECTION")
                .unwrap_or_else(|_| "user_progress".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3002),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "aisim-test".to_string(),
            content_collection: "content".to_string(),
            progress_collection: "user_progress".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3002,
        }
    }
}
