// Global load-balancing service endpoints

use tracing::debug;

use crate::client::VtmClient;
use crate::error::Error;
use crate::models::StatisticsMap;

impl VtmClient {
    /// List GLB services on a node.
    ///
    /// `GET status/{node}/statistics/glb_services`
    pub async fn get_glb_services(&self, node: &str) -> Result<Vec<String>, Error> {
        debug!(node, "listing glb services");
        self.list_children(&["status", node, "statistics", "glb_services"])
            .await
    }

    /// `GET status/{node}/statistics/glb_services/{service}`
    pub async fn get_glb_service_stats(
        &self,
        node: &str,
        service: &str,
    ) -> Result<StatisticsMap, Error> {
        debug!(node, service, "fetching glb service stats");
        self.statistics(&["status", node, "statistics", "glb_services", service])
            .await
    }
}
