// Pool endpoints

use tracing::debug;

use crate::client::VtmClient;
use crate::error::Error;
use crate::models::StatisticsMap;

impl VtmClient {
    /// List the pools on a node.
    ///
    /// `GET status/{node}/statistics/pools`
    pub async fn get_pools(&self, node: &str) -> Result<Vec<String>, Error> {
        debug!(node, "listing pools");
        self.list_children(&["status", node, "statistics", "pools"])
            .await
    }

    /// Statistics for one pool, keyed by metric name.
    ///
    /// `GET status/{node}/statistics/pools/{pool}`
    pub async fn get_pool_stats(&self, node: &str, pool: &str) -> Result<StatisticsMap, Error> {
        debug!(node, pool, "fetching pool stats");
        self.statistics(&["status", node, "statistics", "pools", pool])
            .await
    }
}
