// Virtual server endpoints

use tracing::debug;

use crate::client::VtmClient;
use crate::error::Error;
use crate::models::StatisticsMap;

impl VtmClient {
    /// List the virtual servers on a node.
    ///
    /// `GET status/{node}/statistics/virtual_servers`
    pub async fn get_virtual_servers(&self, node: &str) -> Result<Vec<String>, Error> {
        debug!(node, "listing virtual servers");
        self.list_children(&["status", node, "statistics", "virtual_servers"])
            .await
    }

    /// Statistics for one virtual server, keyed by metric name.
    ///
    /// `GET status/{node}/statistics/virtual_servers/{vserver}`
    pub async fn get_virtual_server_stats(
        &self,
        node: &str,
        vserver: &str,
    ) -> Result<StatisticsMap, Error> {
        debug!(node, vserver, "fetching virtual server stats");
        self.statistics(&["status", node, "statistics", "virtual_servers", vserver])
            .await
    }
}
