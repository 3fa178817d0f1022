// Backend node endpoints
//
// Two views of the same backends: `nodes/node` aggregates each backend
// across every pool that uses it, `nodes/per_pool_node` splits it out
// per pool (entries are named `<pool>-<host>:<port>`).

use tracing::debug;

use crate::client::VtmClient;
use crate::error::Error;
use crate::models::StatisticsMap;

impl VtmClient {
    /// List per-pool backend entries.
    ///
    /// `GET status/{node}/statistics/nodes/per_pool_node`
    pub async fn get_perpool_nodes(&self, node: &str) -> Result<Vec<String>, Error> {
        debug!(node, "listing per-pool nodes");
        self.list_children(&["status", node, "statistics", "nodes", "per_pool_node"])
            .await
    }

    /// Statistics for one per-pool backend entry.
    ///
    /// `GET status/{node}/statistics/nodes/per_pool_node/{entry}`
    pub async fn get_perpool_node_stats(
        &self,
        node: &str,
        entry: &str,
    ) -> Result<StatisticsMap, Error> {
        debug!(node, entry, "fetching per-pool node stats");
        self.statistics(&["status", node, "statistics", "nodes", "per_pool_node", entry])
            .await
    }

    /// List backend nodes (aggregated across pools).
    ///
    /// `GET status/{node}/statistics/nodes/node`
    pub async fn get_nodes(&self, node: &str) -> Result<Vec<String>, Error> {
        debug!(node, "listing backend nodes");
        self.list_children(&["status", node, "statistics", "nodes", "node"])
            .await
    }

    /// Statistics for one backend node, keyed by metric name.
    ///
    /// `GET status/{node}/statistics/nodes/node/{backend}`
    pub async fn get_node_stats(&self, node: &str, backend: &str) -> Result<StatisticsMap, Error> {
        debug!(node, backend, "fetching backend node stats");
        self.statistics(&["status", node, "statistics", "nodes", "node", backend])
            .await
    }
}
