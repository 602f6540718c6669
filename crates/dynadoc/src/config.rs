//! Store configuration loaded from environment variables.

use std::env;

use aws_sdk_dynamodb::Client;

/// Table and connection settings for a DynamoDB-backed repository.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Table name (default: "dynadoc")
    pub table_name: String,
    /// Partition-key attribute name (default: "pk")
    pub partition_key: String,
    /// Sort-key attribute name; `None` for tables without a sort key
    pub sort_key: Option<String>,
    /// Custom endpoint URL (for local DynamoDB)
    pub endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub region: String,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE_NAME` - Table name (default: "dynadoc")
    /// - `DYNAMODB_PARTITION_KEY` - Partition-key attribute (default: "pk")
    /// - `DYNAMODB_SORT_KEY` - Sort-key attribute (absent by default)
    /// - `AWS_ENDPOINT_URL` - Local DynamoDB endpoint (absent by default)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("DYNAMODB_TABLE_NAME").unwrap_or_else(|_| "dynadoc".to_string()),
            partition_key: env::var("DYNAMODB_PARTITION_KEY").unwrap_or_else(|_| "pk".to_string()),
            sort_key: env::var("DYNAMODB_SORT_KEY").ok(),
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        }
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }

    /// Creates a DynamoDB client for this configuration.
    ///
    /// Uses the AWS SDK default credential chain, honoring
    /// `endpoint_url` when set.
    pub async fn connect(&self) -> Client {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(self.region.clone()));

        if let Some(endpoint) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Client::new(&sdk_config)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display() {
        let config = StoreConfig {
            table_name: "users".to_string(),
            partition_key: "email".to_string(),
            sort_key: Some("version".to_string()),
            endpoint_url: Some("http://localhost:8000".to_string()),
            region: "us-east-1".to_string(),
        };
        assert_eq!(
            config.target_display(),
            "Local DynamoDB (http://localhost:8000)"
        );

        let config = StoreConfig {
            endpoint_url: None,
            ..config
        };
        assert_eq!(config.target_display(), "AWS DynamoDB (region: us-east-1)");
    }
}
