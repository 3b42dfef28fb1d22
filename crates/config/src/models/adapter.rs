use serde::{Deserialize, Serialize};

/// Seed record for the platform's default triple-store adapter.
///
/// The values mirror the fixed configuration a fresh WissKI instance is
/// provisioned with: a single writable SPARQL 1.1 adapter pointing at the
/// bundled GraphDB repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdapterSeedConfig {
    pub id: String,
    pub label: String,
    pub description: String,
    pub engine_id: String,
    pub machine_name: String,
    pub writable: bool,
    pub is_preferred_local_store: bool,
    pub is_federatable: bool,
    pub read_url: String,
    pub write_url: String,
    #[serde(default)]
    pub default_graph: Option<String>,
    pub same_as_properties: Vec<String>,
    pub ontology_graphs: Vec<String>,
    /// Base URL of the platform entity API the record is posted to.
    pub api_url: String,
}

impl Default for AdapterSeedConfig {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            label: "Default".to_string(),
            description: "Default SALZ-Adapter".to_string(),
            engine_id: "sparql11_with_pb".to_string(),
            machine_name: "default".to_string(),
            writable: true,
            is_preferred_local_store: true,
            is_federatable: true,
            read_url: "http://graphdb:7200/repositories/default".to_string(),
            write_url: "http://graphdb:7200/repositories/default/statements".to_string(),
            default_graph: None,
            same_as_properties: vec!["http://www.w3.org/2002/07/owl#sameAs".to_string()],
            ontology_graphs: Vec::new(),
            api_url: "http://127.0.0.1:8080".to_string(),
        }
    }
}

impl AdapterSeedConfig {
    /// Apply flat environment variable overrides on top of the current values.
    ///
    /// `DEFAULT_GRAPH` is passed through verbatim as a URI string.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(graph) = std::env::var("DEFAULT_GRAPH") {
            if !graph.is_empty() {
                self.default_graph = Some(graph);
            }
        }
        if let Ok(read_url) = std::env::var("GRAPHDB_READ_URL") {
            if !read_url.is_empty() {
                self.read_url = read_url;
            }
        }
        if let Ok(write_url) = std::env::var("GRAPHDB_WRITE_URL") {
            if !write_url.is_empty() {
                self.write_url = write_url;
            }
        }
        if let Ok(api_url) = std::env::var("WISSKI_API_URL") {
            if !api_url.is_empty() {
                self.api_url = api_url;
            }
        }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Validate adapter seed configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.id.is_empty() {
            return Err(anyhow::anyhow!("Adapter id must not be empty"));
        }

        if self.label.is_empty() {
            return Err(anyhow::anyhow!("Adapter label must not be empty"));
        }

        if self.engine_id.is_empty() {
            return Err(anyhow::anyhow!("Adapter engine id must not be empty"));
        }

        for (name, url) in [
            ("read_url", &self.read_url),
            ("write_url", &self.write_url),
            ("api_url", &self.api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(anyhow::anyhow!(
                    "Adapter {name} must be an http(s) URL: {url}"
                ));
            }
        }

        Ok(())
    }
}
