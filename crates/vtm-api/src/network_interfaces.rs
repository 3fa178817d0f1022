// Network interface endpoints

use tracing::debug;

use crate::client::VtmClient;
use crate::error::Error;
use crate::models::StatisticsMap;

impl VtmClient {
    /// List network interfaces on a node (`eth0`, `bond0`, ...).
    ///
    /// `GET status/{node}/statistics/network_interface`
    pub async fn get_net_interfaces(&self, node: &str) -> Result<Vec<String>, Error> {
        debug!(node, "listing network interfaces");
        self.list_children(&["status", node, "statistics", "network_interface"])
            .await
    }

    /// Counters for one interface, keyed by metric name.
    ///
    /// `GET status/{node}/statistics/network_interface/{interface}`
    pub async fn get_net_interface_stats(
        &self,
        node: &str,
        interface: &str,
    ) -> Result<StatisticsMap, Error> {
        debug!(node, interface, "fetching network interface stats");
        self.statistics(&["status", node, "statistics", "network_interface", interface])
            .await
    }
}
