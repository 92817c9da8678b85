//! Storage pool resource.
//!
//! Listings are parsed into [`PoolInfo`]; mutating operations run
//! their output through the raising policy with the expected-signature
//! filters for this resource, so callers get `PoolNameInUse` rather
//! than a string to grep.

use tracing::debug;

use sanctl_common::enums::ArrayEnum;
use sanctl_common::enums::block::PoolRaidType;
use sanctl_common::{ArrayError, FaultSignature, OutputCheck, raise_if_err};

use crate::command::CmdBuilder;
use crate::error::ClientError;
use crate::executor::{CmdResponse, CommandExecutor};
use crate::parse::{Record, parse_records};

/// One storage pool as reported by a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolInfo {
    pub pool_id: u64,
    pub name: String,
    pub raid_type: Option<PoolRaidType>,
    pub state: String,
    pub user_capacity_gbs: Option<f64>,
    pub consumed_capacity_gbs: Option<f64>,
    pub available_capacity_gbs: Option<f64>,
    pub lun_ids: Vec<u64>,
    pub disks: Vec<String>,
}

impl PoolInfo {
    fn from_record(record: &Record) -> Result<Self, ClientError> {
        Ok(Self {
            pool_id: record.get_u64("Pool ID")?,
            name: record.require("Pool Name")?.to_string(),
            raid_type: record
                .get("Raid Type")
                .and_then(|value| PoolRaidType::parse(value).ok()),
            state: record.get("State").unwrap_or_default().to_string(),
            user_capacity_gbs: record.get_f64("User Capacity (GBs)").ok(),
            consumed_capacity_gbs: record.get_f64("Consumed Capacity (GBs)").ok(),
            available_capacity_gbs: record.get_f64("Available Capacity (GBs)").ok(),
            lun_ids: record
                .list("LUNs")
                .iter()
                .filter_map(|id| id.parse().ok())
                .collect(),
            disks: record
                .lines("Disks")
                .iter()
                .map(|disk| disk.to_string())
                .collect(),
        })
    }
}

/// Pool operations.
pub struct Pool;

impl Pool {
    /// List every pool on the array.
    pub fn get_all(cli: &impl CommandExecutor) -> Result<Vec<PoolInfo>, ClientError> {
        let tokens = CmdBuilder::new("storagepool")
            .arg("-list")
            .arg("-all")
            .build();
        let response = cli.execute(&tokens)?;
        check_lookup(&response)?;
        pools_from_response(&response)
    }

    /// Look up one pool by its numeric id.
    pub fn get_by_id(cli: &impl CommandExecutor, pool_id: u64) -> Result<PoolInfo, ClientError> {
        let tokens = CmdBuilder::new("storagepool")
            .arg("-list")
            .opt("-id", pool_id)
            .arg("-all")
            .build();
        Self::get_one(cli, &tokens)
    }

    /// Look up one pool by name.
    pub fn get_by_name(cli: &impl CommandExecutor, name: &str) -> Result<PoolInfo, ClientError> {
        let tokens = CmdBuilder::new("storagepool")
            .arg("-list")
            .opt("-name", name)
            .arg("-all")
            .build();
        Self::get_one(cli, &tokens)
    }

    fn get_one(cli: &impl CommandExecutor, tokens: &[String]) -> Result<PoolInfo, ClientError> {
        let response = cli.execute(tokens)?;
        check_lookup(&response)?;
        pools_from_response(&response)?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ClientError::Array(ArrayError::PoolNotFound(response.stdout().to_string()))
            })
    }

    /// Create a pool on the given disks.
    pub fn create(
        cli: &impl CommandExecutor,
        name: &str,
        disks: &[&str],
        raid_type: PoolRaidType,
    ) -> Result<(), ClientError> {
        let tokens = CmdBuilder::new("storagepool")
            .arg("-create")
            .opt_list("-disks", disks.iter().copied())
            .option_tokens(raid_type.option_tokens())
            .opt("-name", name)
            .build();
        debug!(pool = name, disks = disks.len(), "creating storage pool");
        let response = cli.execute(&tokens)?;

        raise_if_err(
            &response,
            OutputCheck::new()
                .kind(ArrayError::PoolNameInUse)
                .expected(&[FaultSignature::PoolNameInUse]),
        )?;
        raise_if_err(
            &response,
            OutputCheck::new()
                .kind(ArrayError::DiskInUse)
                .expected(&[FaultSignature::PoolDiskUsed]),
        )?;
        // Anything else the array had to say about a create is a
        // failure; success is a blank response.
        raise_if_err(&response, OutputCheck::new().kind(ArrayError::CreatePool))?;
        Ok(())
    }

    /// Destroy a pool by id.
    pub fn delete(
        cli: &impl CommandExecutor,
        pool_id: u64,
        force: bool,
    ) -> Result<(), ClientError> {
        let mut builder = CmdBuilder::new("storagepool")
            .arg("-destroy")
            .opt("-id", pool_id);
        if force {
            builder = builder.arg("-force");
        }
        let tokens = builder.arg("-o").build();
        debug!(pool_id, force, "destroying storage pool");
        let response = cli.execute(&tokens)?;

        raise_if_err(
            &response,
            OutputCheck::new()
                .kind(ArrayError::PoolNotFound)
                .expected(&[FaultSignature::GeneralNotFound]),
        )?;
        raise_if_err(
            &response,
            OutputCheck::new()
                .kind(ArrayError::PoolDestroying)
                .expected(&[FaultSignature::PoolDestroying]),
        )?;
        raise_if_err(&response, OutputCheck::new())?;
        Ok(())
    }
}

/// Lookups share one failure mode: the pool is not there.
fn check_lookup(response: &CmdResponse) -> Result<(), ClientError> {
    raise_if_err(
        response,
        OutputCheck::new()
            .kind(ArrayError::PoolNotFound)
            .expected(&[FaultSignature::GeneralNotFound]),
    )?;
    Ok(())
}

fn pools_from_response(response: &CmdResponse) -> Result<Vec<PoolInfo>, ClientError> {
    parse_records(response.stdout())
        .iter()
        .filter(|record| record.get("Pool Name").is_some())
        .map(PoolInfo::from_record)
        .collect()
}
