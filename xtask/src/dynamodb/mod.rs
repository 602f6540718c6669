//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;

pub use config::AttributeType;
pub use error::{DynamodbError, Result};

use dialoguer::Confirm;

use crate::prelude::*;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy DynamoDB table infrastructure.
    Deploy(DeployCommand),
}

/// Deploy or destroy DynamoDB infrastructure.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy DynamoDB table infrastructure.

By default, this command creates the table used by the dynadoc
integration tests, with a HASH key and an optional RANGE key.

The command shows a plan of changes before applying and asks for
confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the table instead of creating it.
    #[arg(long)]
    pub destroy: bool,

    /// Table name to use.
    #[arg(long, default_value = "dynadoc", env = "DYNAMODB_TABLE_NAME")]
    pub table_name: String,

    /// Partition-key attribute name.
    #[arg(long, default_value = "pk", env = "DYNAMODB_PARTITION_KEY")]
    pub partition_key: String,

    /// Partition-key attribute type.
    #[arg(long, value_enum, default_value = "S")]
    pub partition_key_type: AttributeType,

    /// Sort-key attribute name (omit for a table without a sort key).
    #[arg(long, env = "DYNAMODB_SORT_KEY")]
    pub sort_key: Option<String>,

    /// Sort-key attribute type.
    #[arg(long, value_enum, default_value = "N")]
    pub sort_key_type: AttributeType,
}

impl DeployCommand {
    fn table_config(&self) -> config::TableConfig {
        config::TableConfig {
            table_name: self.table_name.clone(),
            partition_key: config::KeyAttribute {
                name: self.partition_key.clone(),
                attribute_type: self.partition_key_type,
            },
            sort_key: self.sort_key.as_ref().map(|name| config::KeyAttribute {
                name: name.clone(),
                attribute_type: self.sort_key_type,
            }),
            billing_mode: config::BillingMode::PayPerRequest,
        }
    }
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await?;
    let current_state = client::get_table_state(&dynamo_client, &cmd.table_name).await?;

    if cmd.destroy {
        let plan = planning::calculate_destroy_plan(current_state.as_ref(), &cmd.table_name);

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in planning::format_destroy_plan(&plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DestroyPlan::AlreadyGone { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Are you sure you want to delete this table? ALL DATA WILL BE LOST")
                .default(false)
                .interact()
                .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting table..."));
        }

        deploy::execute_destroy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table destroyed successfully."));
        }
    } else {
        let desired = cmd.table_config();
        let plan = planning::calculate_deploy_plan(current_state.as_ref(), &desired);

        if !global.is_silent() {
            aprintln!("{}", p_y("Deploy Plan:"));
            for line in planning::format_deploy_plan(&plan) {
                aprintln!("  {}", p_g(&line));
            }
            aprintln!();
        }

        if matches!(plan, planning::DeployPlan::NoChanges { .. }) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to deploy."));
            }
            return Ok(());
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Apply these changes?")
                .default(true)
                .interact()
                .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Creating table..."));
        }

        deploy::execute_deploy_plan(&dynamo_client, &plan).await?;

        if !global.is_silent() {
            aprintln!("{}", p_g("Table deployed successfully."));
        }
    }

    Ok(())
}
