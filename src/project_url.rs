use crate::error::Error;
use regex::Regex;

/// Where a project board lives; decides which root query field we ask for
/// its ID under.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OwnerType {
    Organization,
    User,
}

impl OwnerType {
    /// Map the token as it appears in a project URL (`orgs` or `users`).
    pub fn from_url_token(token: &str) -> Result<OwnerType, Error> {
        match token {
            "orgs" => Ok(OwnerType::Organization),
            "users" => Ok(OwnerType::User),
            other => Err(Error::UnsupportedOwnerType(other.to_string())),
        }
    }

    /// The root query field that projects for this kind of owner hang off.
    pub fn root_query_field(&self) -> &'static str {
        match self {
            OwnerType::Organization => "organization",
            OwnerType::User => "user",
        }
    }
}

/// The parts of a project URL that we need in order to look up its node ID.
#[derive(Debug, PartialEq, Eq)]
pub struct ProjectRef {
    pub owner_type: OwnerType,
    pub owner_name: String,
    pub project_number: usize,
}

/// Pull the owner and project number out of a project board URL like
/// `https://github.com/orgs/paritytech/projects/22`. The scheme is optional
/// and anything after the project number is ignored.
pub fn parse_project_url(url: &str) -> Result<ProjectRef, Error> {
    let re = Regex::new(
        r"^(?:https://)?github\.com/(?P<ownerType>orgs|users)/(?P<ownerName>[^/]+)/projects/(?P<projectNumber>\d+)"
    ).expect("valid regex");

    let caps = re
        .captures(url)
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))?;

    let owner_type = OwnerType::from_url_token(&caps["ownerType"])?;
    let owner_name = caps["ownerName"].to_string();
    let project_number: usize = caps["projectNumber"]
        .parse()
        .map_err(|_| Error::InvalidUrl(url.to_string()))?;

    Ok(ProjectRef {
        owner_type,
        owner_name,
        project_number,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_org_urls() {
        let r = parse_project_url("https://github.com/orgs/my-org/projects/7").unwrap();
        assert_eq!(
            r,
            ProjectRef {
                owner_type: OwnerType::Organization,
                owner_name: "my-org".to_string(),
                project_number: 7
            }
        );
    }

    #[test]
    fn parses_user_urls() {
        let r = parse_project_url("https://github.com/users/jsdw/projects/12").unwrap();
        assert_eq!(
            r,
            ProjectRef {
                owner_type: OwnerType::User,
                owner_name: "jsdw".to_string(),
                project_number: 12
            }
        );
    }

    #[test]
    fn scheme_is_optional() {
        let with = parse_project_url("https://github.com/orgs/acme/projects/3").unwrap();
        let without = parse_project_url("github.com/orgs/acme/projects/3").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn trailing_segments_are_ignored() {
        let r = parse_project_url("https://github.com/orgs/acme/projects/3/views/1").unwrap();
        assert_eq!(r.project_number, 3);
    }

    #[test]
    fn rejects_things_that_are_not_project_urls() {
        let bad = [
            "",
            "https://github.com/orgs/acme",
            "https://github.com/orgs/acme/projects/abc",
            "https://gitlab.com/orgs/acme/projects/3",
            "https://github.com/acme/projects/3",
            "some nonsense",
        ];
        for url in bad {
            let err = parse_project_url(url).unwrap_err();
            assert!(matches!(err, Error::InvalidUrl(_)), "expected InvalidUrl for {url:?}, got {err}");
        }
    }

    #[test]
    fn invalid_url_message_echoes_the_input() {
        let err = parse_project_url("https://example.com/nope").unwrap_err();
        assert!(err.to_string().contains("https://example.com/nope"));
    }

    #[test]
    fn owner_type_token_mapping() {
        assert_eq!(OwnerType::from_url_token("orgs").unwrap(), OwnerType::Organization);
        assert_eq!(OwnerType::from_url_token("users").unwrap(), OwnerType::User);
        for token in ["teams", "", "org", "Orgs"] {
            let err = OwnerType::from_url_token(token).unwrap_err();
            assert!(matches!(err, Error::UnsupportedOwnerType(_)));
        }
    }

    #[test]
    fn root_query_fields() {
        assert_eq!(OwnerType::Organization.root_query_field(), "organization");
        assert_eq!(OwnerType::User.root_query_field(), "user");
    }
}
