//! Name and email generation.

use super::choice::one_of;
use rand::Rng;

/// Generate a "First Last" name from the given name pools.
pub fn full_name<R: Rng>(rng: &mut R, first_names: &[String], last_names: &[String]) -> String {
    format!("{} {}", one_of(rng, first_names), one_of(rng, last_names))
}

/// Derive an email address from an already-generated name.
///
/// The local part is the lowercased name with spaces turned into dots; the
/// domain is a uniform draw from the pool. Deriving from the co-generated
/// name keeps the two fields consistent within a record.
pub fn email_for_name<R: Rng>(rng: &mut R, name: &str, domains: &[String]) -> String {
    let local = name.to_lowercase().replace(' ', ".");
    format!("{}@{}", local, one_of(rng, domains))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_name_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = pool(&["Ada", "Alan"]);
        let last = pool(&["Lovelace", "Turing"]);

        for _ in 0..20 {
            let name = full_name(&mut rng, &first, &last);
            let parts: Vec<&str> = name.split(' ').collect();
            assert_eq!(parts.len(), 2);
            assert!(first.iter().any(|f| f == parts[0]));
            assert!(last.iter().any(|l| l == parts[1]));
        }
    }

    #[test]
    fn test_email_derived_from_name() {
        let mut rng = StdRng::seed_from_u64(42);
        let domains = pool(&["example.com"]);

        let email = email_for_name(&mut rng, "Jane Smith", &domains);
        assert_eq!(email, "jane.smith@example.com");
    }

    #[test]
    fn test_email_domain_from_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let domains = pool(&["a.com", "b.org"]);

        for _ in 0..20 {
            let email = email_for_name(&mut rng, "John Brown", &domains);
            let domain = email.split('@').nth(1).unwrap();
            assert!(domains.iter().any(|d| d == domain));
        }
    }
}
