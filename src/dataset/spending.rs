//! Canonical federal spending tree
//!
//! Hand-maintained figures in billions of dollars, two snapshots per line:
//! the 2023-24 actuals (baseline) and the 2024-25 projection (current).
//! One-time items that lapsed between the two years carry a zero current
//! amount; rebates and offsets are encoded as negative amounts.

use crate::models::BudgetNode;

fn leaf(name: &str, baseline: f64, current: f64) -> BudgetNode {
    BudgetNode::leaf(name, baseline, current)
}

fn flat(name: &str, amount: f64) -> BudgetNode {
    BudgetNode::flat_leaf(name, amount)
}

fn group(name: &str, children: Vec<BudgetNode>) -> BudgetNode {
    BudgetNode::group(name, children)
}

/// Build the spending tree
pub(super) fn tree() -> BudgetNode {
    group(
        "Spending",
        vec![
            group(
                "Economy and Standard of Living",
                vec![
                    group(
                        "Standard of Living",
                        vec![
                            group(
                                "Health",
                                vec![
                                    flat("Health Research", 1.35),
                                    flat("Health Care Systems + Protection", 6.85),
                                    flat("Food Safety", 1.08),
                                    flat("Public Health + Disease Prevention", 4.43),
                                ],
                            ),
                            group(
                                "Standard of Living",
                                vec![
                                    flat("Revenue Canada", 6.94),
                                    flat("Employment + Training", 28.26),
                                    flat("Housing Assistance", 5.43),
                                    flat("Gender Equality", 0.32),
                                    flat("Official Languages + Culture", 4.78),
                                    flat("Support for Veterans", 6.07),
                                    leaf("Carbon Tax Rebate", 9.86, 0.0),
                                ],
                            ),
                        ],
                    ),
                    group(
                        "Economy + Infrastructure",
                        vec![
                            group(
                                "Innovation + Research",
                                vec![
                                    flat("Investment, Growth and Commercialization", 4.35),
                                    flat("Research", 4.11),
                                    flat("Statistics Canada", 0.74),
                                    flat("Other Boards + Councils", 0.18),
                                ],
                            ),
                            group(
                                "Community and Regional Development",
                                vec![
                                    flat("Economic Development in Southern Ontario", 0.46),
                                    flat("Economic Development in Atlantic Canada", 0.39),
                                    flat("Economic Development in the Pacific Region", 0.19),
                                    flat("Western + Northern Economic Development", 1.09),
                                    flat("Economic Development in Northern Ontario", 0.07),
                                    flat("Economic Development in Quebec", 0.39),
                                ],
                            ),
                            group(
                                "Fisheries",
                                vec![
                                    flat("Coastguard Operations", 1.8),
                                    flat("Fisheries + Aquatic Ecosystems", 1.78),
                                    flat("Other Fisheries Expenses", 0.97),
                                ],
                            ),
                            flat("Agriculture", 4.19),
                            flat("Space", 0.45),
                            flat("Banking + Finance", 0.23),
                            group(
                                "Environment and Climate Change",
                                vec![
                                    flat("Other Environment and Climate Change Programs", 1.46),
                                    flat("Weather Services", 0.28),
                                    flat("Nature Conservation", 0.72),
                                    flat("National Parks", 1.45),
                                ],
                            ),
                            group(
                                "Natural Resources Management",
                                vec![
                                    flat(
                                        "Innovative and Sustainable Natural Resources Development",
                                        1.911,
                                    ),
                                    flat("Support for Global Competition", 0.874),
                                    flat("Nuclear Labs + Decommissioning", 1.514),
                                    flat("Natural Resources Science + Risk Mitigation", 0.452),
                                    flat("Other Natural Resources Management Support", 0.344),
                                ],
                            ),
                            flat("Infrastructure Investments", 9.02),
                            flat("Transportation", 5.31),
                        ],
                    ),
                ],
            ),
            group(
                "Social Security",
                vec![
                    flat("Retirement Benefits", 76.03),
                    flat("Employment Insurance", 23.13),
                    flat("Children's Benefits", 26.34),
                    leaf("COVID-19 Income Support", -4.84, 0.0),
                    leaf("Canada Emergency Wage Subsidy", -0.42, 0.0),
                ],
            ),
            group(
                "Safety",
                vec![
                    group(
                        "Public Safety",
                        vec![
                            flat("CSIS", 0.83),
                            flat("Corrections", 3.374),
                            flat("RCMP", 5.14),
                            flat("Disaster Relief", 0.52),
                            flat("Community Safety", 0.839),
                            flat("Office of the Chief Electoral Officer", 0.249),
                            flat("Other Public Safety Expenses", 0.269),
                            flat("Justice System", 2.442),
                        ],
                    ),
                    group(
                        "Immigration + Border Security",
                        vec![
                            flat("Border Security", 2.69),
                            flat("Other Immigration Services", 3.389),
                            flat("Settlement Assistance", 1.926),
                            flat("Interim Housing Assistance", 0.26),
                            flat(
                                "Visitors, International Students + Temporary Workers",
                                0.52,
                            ),
                            flat("Citizenship + Passports", 0.24),
                        ],
                    ),
                ],
            ),
            group(
                "Other",
                vec![
                    group(
                        "Public Works + Government Services",
                        vec![
                            flat("Other Public Services + Procurement", 5.388),
                            flat("Government IT Operations", 2.7),
                        ],
                    ),
                    group(
                        "Functioning of Government",
                        vec![
                            flat("Parliament", 0.93),
                            flat("Privy Council Office", 0.347),
                            flat("Treasury Board", 4.954),
                            flat("Office of the Secretary to the Governor General", 0.026),
                        ],
                    ),
                    flat("Net actuarial losses", -7.49),
                ],
            ),
            group(
                "Transfers to Provinces",
                vec![
                    group(
                        "Health Transfer to Provinces",
                        vec![
                            flat("Newfoundland and Labrador HTP", 0.666),
                            flat("Prince Edward Island HTP", 0.214),
                            flat("Nova Scotia HTP", 1.303),
                            flat("New Brunswick HTP", 1.027),
                            flat("Quebec HTP", 10.911),
                            flat("Ontario HTP", 19.266),
                            flat("Manitoba HTP", 1.794),
                            flat("Saskatchewan HTP", 1.491),
                            flat("Alberta HTP", 5.771),
                            flat("British Columbia HTP", 6.817),
                            flat("Yukon HTP", 0.056),
                            flat("Northwest Territories HTP", 0.055),
                            flat("Nunavut HTP", 0.05),
                        ],
                    ),
                    group(
                        "Social Transfer to Provinces",
                        vec![
                            flat("Newfoundland and Labrador STP", 0.221),
                            flat("Prince Edward Island STP", 0.071),
                            flat("Nova Scotia STP", 0.433),
                            flat("New Brunswick STP", 0.341),
                            flat("Quebec STP", 3.624),
                            flat("Ontario STP", 6.4),
                            flat("Manitoba STP", 0.596),
                            flat("Saskatchewan STP", 0.495),
                            flat("Alberta STP", 1.917),
                            flat("British Columbia STP", 2.264),
                            flat("Yukon STP", 0.019),
                            flat("Northwest Territories STP", 0.018),
                            flat("Nunavut STP", 0.017),
                        ],
                    ),
                    group(
                        "Equalization Payments to Provinces",
                        vec![
                            flat("Newfoundland and Labrador EQP", 0.0),
                            flat("Prince Edward Island EQP", 0.561),
                            flat("Nova Scotia EQP", 2.803),
                            flat("New Brunswick EQP", 2.631),
                            flat("Quebec EQP", 14.037),
                            flat("Ontario EQP", 0.421),
                            flat("Manitoba EQP", 3.51),
                            flat("Saskatchewan EQP", 0.0),
                            flat("Alberta EQP", 0.0),
                            flat("British Columbia EQP", 0.0),
                            flat("Yukon EQP", 0.0),
                            flat("Northwest Territories EQP", 0.0),
                            flat("Nunavut EQP", 0.0),
                        ],
                    ),
                    flat("Quebec Tax Offset", -7.1),
                    flat("Other Major Transfers", 17.6),
                ],
            ),
            group("Obligations", vec![flat("Net Interest on Debt", 47.27)]),
            group(
                "Defence",
                vec![
                    leaf("Ready Forces", 13.368, 16.368),
                    leaf("Defence Procurement", 4.93, 7.93),
                    flat("Sustainable Bases, IT Systems, Infrastructure", 4.913),
                    leaf("Defence Team", 5.39, 8.09),
                    flat("Future Force Design", 1.472),
                    flat("Defence Operations + Internal Services", 3.39),
                    flat("Communications Security Establishment", 1.01),
                    flat("Other Defence", 0.01),
                ],
            ),
            group(
                "Indigenous Priorities",
                vec![
                    group(
                        "Indigenous Well-Being + Self Determination",
                        vec![
                            flat(
                                "Grants to Support the New Fiscal Relationship with First Nations",
                                1.36,
                            ),
                            flat("Community Infrastructure Grants", 3.31),
                            flat(
                                "First Nations Elementary and Secondary Educational Advancement",
                                2.56,
                            ),
                            flat("On-reserve Income Support in Yukon Territory", 1.4),
                            flat("First Nations and Inuit Health Infrastructure Support", 1.22),
                            flat("Emergency Management Activities On-Reserve", 0.59),
                            flat(
                                "Prevention and Protection Services for Children, Youth, Families and Communities",
                                3.57,
                            ),
                            flat("First Nations and Inuit Primary Health Care", 3.03),
                            flat("Other Support for Indigenous Well-Being", 9.45),
                        ],
                    ),
                    group(
                        "Crown-Indigenous Relations",
                        vec![
                            group(
                                "Claims Settlements",
                                vec![
                                    leaf("Out of Court Settlement", 5.0, 0.0),
                                    leaf("Gottfriedson Band Class Settlement", 2.82, 0.0),
                                    leaf("Childhood Claims Settlement", 1.42, 0.0),
                                    leaf("Other Settlement Agreements", 0.85, 0.0),
                                ],
                            ),
                            flat(
                                "Other Grants and Contributions to Support Crown-Indigenous Relations",
                                6.26,
                            ),
                        ],
                    ),
                ],
            ),
            group(
                "International Affairs",
                vec![
                    flat("Development, Peace + Security Programming", 5.37),
                    flat("International Diplomacy", 1.0),
                    flat("International Development Research Centre", 0.16),
                    flat("Support for Embassies + Canada's Presence Abroad", 1.23),
                    flat("Other International Affairs Activities", 11.03),
                    flat("Trade and Investment", 0.41),
                ],
            ),
        ],
    )
}
