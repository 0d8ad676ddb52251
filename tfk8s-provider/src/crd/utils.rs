use kube::CustomResourceExt;

use crate::crd::camel::v1::integration::Integration;
use crate::crd::camel::v1::kamelet::Kamelet;
use crate::error::Result;


/// Render the CRDs of every kind bound to the provider as a multi-document YAML stream
pub fn generate_crds() -> Result<String> {
    let mut out = String::new();
    for crd in vec![Integration::crd(), Kamelet::crd()] {
        out.push_str("---\n");
        out.push_str(&serde_norway::to_string(&crd)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_document_per_kind() {
        let yaml = generate_crds().unwrap();

        assert_eq!(yaml.matches("---\n").count(), 2);
        assert!(yaml.contains("name: integrations.camel.apache.org"));
        assert!(yaml.contains("name: kamelets.camel.apache.org"));
    }
}
