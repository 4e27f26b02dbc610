/// Per-call options for controller API requests.
///
/// `name`, `cloud`, `cloud_uuid`, `skip_default` and `include_name` drive the
/// object-lookup query; `tenant` overrides the session tenant for this call;
/// `params` carries any extra query parameters verbatim.
#[derive(Debug, Clone, Default)]
pub struct ApiOptions {
    pub name: Option<String>,
    pub cloud: Option<String>,
    pub cloud_uuid: Option<String>,
    pub tenant: Option<String>,
    pub skip_default: bool,
    pub include_name: bool,
    pub params: Vec<(String, String)>,
}

impl ApiOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn cloud(mut self, cloud: impl Into<String>) -> Self {
        self.cloud = Some(cloud.into());
        self
    }

    pub fn cloud_uuid(mut self, cloud_uuid: impl Into<String>) -> Self {
        self.cloud_uuid = Some(cloud_uuid.into());
        self
    }

    pub fn tenant(mut self, tenant: impl Into<String>) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    pub fn skip_default(mut self, skip_default: bool) -> Self {
        self.skip_default = skip_default;
        self
    }

    pub fn include_name(mut self, include_name: bool) -> Self {
        self.include_name = include_name;
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Query pairs for the lookup filters (`name`, `cloud`, ...).
    pub(crate) fn lookup_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref name) = self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(ref cloud) = self.cloud {
            pairs.push(("cloud", cloud.clone()));
        } else if let Some(ref cloud_uuid) = self.cloud_uuid {
            pairs.push(("cloud_ref.uuid", cloud_uuid.clone()));
        }
        if self.skip_default {
            pairs.push(("skip_default", "true".to_string()));
        }
        if self.include_name {
            pairs.push(("include_name", "true".to_string()));
        }
        pairs
    }

    /// Extra query pairs, minus any key already covered by a lookup filter.
    pub(crate) fn extra_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .filter(|(key, _)| {
                !((key == "name" && self.name.is_some())
                    || (key == "cloud" && self.cloud.is_some())
                    || (key == "cloud_ref.uuid" && self.cloud_uuid.is_some())
                    || (key == "skip_default" && self.skip_default)
                    || (key == "include_name" && self.include_name))
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiOptions;

    #[test]
    fn lookup_pairs_prefer_cloud_name_over_uuid() {
        let options = ApiOptions::new()
            .name("vs-1")
            .cloud("Default-Cloud")
            .cloud_uuid("cloud-uuid-1")
            .include_name(true);
        let pairs = options.lookup_pairs();
        assert_eq!(
            pairs,
            vec![
                ("name", "vs-1".to_string()),
                ("cloud", "Default-Cloud".to_string()),
                ("include_name", "true".to_string()),
            ]
        );
    }

    #[test]
    fn lookup_pairs_fall_back_to_cloud_uuid() {
        let options = ApiOptions::new().name("vs-1").cloud_uuid("cloud-uuid-1");
        let pairs = options.lookup_pairs();
        assert_eq!(
            pairs,
            vec![
                ("name", "vs-1".to_string()),
                ("cloud_ref.uuid", "cloud-uuid-1".to_string()),
            ]
        );
    }

    #[test]
    fn extra_pairs_skip_keys_shadowed_by_lookup_filters() {
        let options = ApiOptions::new()
            .name("vs-1")
            .param("name", "other")
            .param("page_size", "100");
        assert_eq!(
            options.extra_pairs(),
            vec![("page_size".to_string(), "100".to_string())]
        );
    }
}
