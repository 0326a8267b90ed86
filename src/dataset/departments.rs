//! Budget node to government department mappings
//!
//! Links tree node names to department page slugs so a presentation layer
//! can route from a chart node to the responsible department, and resolves
//! slugs to official department names. Both lookups are partial: nodes
//! without a responsible department (transfers, settlements, provinces)
//! simply return `None`.

/// Resolve a budget node name to its department page slug
pub fn department_slug(node_name: &str) -> Option<&'static str> {
    let slug = match node_name {
        "Defence" | "Ready Forces" | "Defence Procurement" => "national-defence",
        "International Affairs" => "global-affairs-canada",
        "Immigration + Border Security"
        | "Border Security"
        | "Other Immigration Services"
        | "Settlement Assistance" => "immigration-refugees-and-citizenship",
        "Support for Veterans" => "veterans-affairs",
        "Transportation" => "transport-canada",
        "Infrastructure Investments" => "housing-infrastructure-communities",
        "Health"
        | "Health Care Systems + Protection"
        | "Food Safety"
        | "Public Health + Disease Prevention" => "health-canada",
        "Public Works + Government Services" | "Government IT Operations" => {
            "public-services-and-procurement-canada"
        }
        "Innovation + Research" => "innovation-science-and-industry",
        "Net Interest on Debt" | "Health Transfers to Provinces" => "department-of-finance",
        "Employment + Training"
        | "Social Security"
        | "Retirement Benefits"
        | "Employment Insurance"
        | "Children's Benefits" => "employment-and-social-development-canada",
        "Indigenous Priorities"
        | "Indigenous Well-Being + Self Determination"
        | "Crown-Indigenous Relations" => "indigenous-services-and-northern-affairs",
        "CSIS" | "Corrections" | "RCMP" | "Disaster Relief" | "Community Safety"
        | "Other Public Safety Expenses" => "public-safety-canada",
        _ => return None,
    };
    Some(slug)
}

/// Resolve a department slug to its official name
pub fn department_name(slug: &str) -> Option<&'static str> {
    let name = match slug {
        "canada-revenue-agency" => "Canada Revenue Agency",
        "national-defence" => "National Defence",
        "global-affairs-canada" => "Global Affairs Canada",
        "immigration-refugees-and-citizenship" => "Immigration, Refugees and Citizenship",
        "veterans-affairs" => "Veterans Affairs",
        "transport-canada" => "Transport Canada",
        "housing-infrastructure-communities" => {
            "Housing, Infrastructure and Communities Canada"
        }
        "health-canada" => "Health Canada",
        "public-services-and-procurement-canada" => {
            "Public Services and Procurement Canada"
        }
        "innovation-science-and-industry" => "Innovation, Science and Industry",
        "public-safety-canada" => "Public Safety Canada",
        "indigenous-services-and-northern-affairs" => {
            "Indigenous Services Canada + Crown-Indigenous Relations and Northern Affairs Canada"
        }
        "employment-and-social-development-canada" => {
            "Employment and Social Development Canada"
        }
        "department-of-finance" => "Finance Canada",
        _ => return None,
    };
    Some(name)
}
