//! # Team roster ordering and grouping
//!
//! Roles and departments are free text typed by admins, so ordering works on
//! keywords rather than enums. A [`KeywordOrder`] ranks a piece of text by the
//! keyword it contains, and [`Roster::group`] uses two of them (roles and
//! departments, bundled as [`OrderingRules`]) to lay out the team section:
//!
//! 1. president and vice president, taken from the core department;
//! 2. any other core members;
//! 3. the advisory block, in source order;
//! 4. every remaining department, ordered by department rank, each with its
//!    members ordered by role rank.
//!
//! Only members whose department appears in the supplied department list are
//! placed, and each of them lands in exactly one group.
//!
//! ## Keyword matching
//!
//! Matching is a case-insensitive substring test and the first keyword in
//! list order wins. A keyword is passed over when a longer keyword that
//! contains it also occurs in the text, so `"Vice Head"` ranks as `Vice Head`
//! even though it also contains `Head`.

use crate::config::{EmptyGroups, RosterConfig};
use crate::models::Member;

/// Position of a text in a keyword list. `Unranked` sorts after every rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ranked(usize),
    Unranked,
}

/// An ordered list of keywords.
#[derive(Clone, Debug, PartialEq)]
pub struct KeywordOrder {
    /// Lowercased, trimmed; empty entries never match.
    keywords: Vec<String>,
}

impl KeywordOrder {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Rank `text` by the first listed keyword it contains.
    pub fn rank(&self, text: &str) -> Rank {
        let text = text.to_lowercase();
        let matches = |keyword: &String| !keyword.is_empty() && text.contains(keyword.as_str());
        self.keywords
            .iter()
            .enumerate()
            .filter(|(_, keyword)| matches(keyword))
            .find(|(_, keyword)| {
                !self.keywords.iter().any(|other| {
                    other.len() > keyword.len()
                        && other.contains(keyword.as_str())
                        && matches(other)
                })
            })
            .map_or(Rank::Unranked, |(index, _)| Rank::Ranked(index))
    }
}

/// Everything [`Roster::group`] needs to know about ordering.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderingRules {
    pub roles: KeywordOrder,
    pub departments: KeywordOrder,
    pub core_department: String,
    pub advisory_department: String,
    pub empty_groups: EmptyGroups,
}

impl OrderingRules {
    pub fn from_config(config: &RosterConfig) -> Self {
        Self {
            roles: KeywordOrder::new(&config.role_order),
            departments: KeywordOrder::new(&config.department_order),
            core_department: config.core_department.clone(),
            advisory_department: config.advisory_department.clone(),
            empty_groups: config.empty_groups,
        }
    }

    pub fn with_empty_groups(mut self, empty_groups: EmptyGroups) -> Self {
        self.empty_groups = empty_groups;
        self
    }

    pub fn role_rank(&self, role: &str) -> Rank {
        self.roles.rank(role)
    }

    pub fn department_rank(&self, name: &str) -> Rank {
        self.departments.rank(name)
    }
}

impl Default for OrderingRules {
    fn default() -> Self {
        Self::from_config(&RosterConfig::default())
    }
}

/// A regular department and its ranked members.
#[derive(Clone, Debug, PartialEq)]
pub struct DepartmentGroup {
    pub name: String,
    pub members: Vec<Member>,
}

impl DepartmentGroup {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The team section layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    pub president: Option<Member>,
    pub vice_president: Option<Member>,
    /// Core members who are neither president nor vice president.
    pub core_others: Vec<Member>,
    pub advisory: Vec<Member>,
    pub departments: Vec<DepartmentGroup>,
}

impl Roster {
    /// Lay out `members` over `departments`. Pure; equal input gives equal output.
    pub fn group(members: &[Member], departments: &[String], rules: &OrderingRules) -> Self {
        let listed = |name: &str| departments.iter().any(|d| names_match(d, name));
        let mut roster = Roster::default();

        if listed(&rules.core_department) {
            for member in members
                .iter()
                .filter(|m| names_match(&m.dept, &rules.core_department))
            {
                let role = member.role.to_lowercase();
                if roster.president.is_none()
                    && role.contains("president")
                    && !role.contains("vice")
                {
                    roster.president = Some(member.clone());
                } else if roster.vice_president.is_none() && role.contains("vice president") {
                    roster.vice_president = Some(member.clone());
                } else {
                    roster.core_others.push(member.clone());
                }
            }
        }

        if listed(&rules.advisory_department) {
            roster.advisory = members
                .iter()
                .filter(|m| names_match(&m.dept, &rules.advisory_department))
                .cloned()
                .collect();
        }

        let mut regular: Vec<&String> = Vec::new();
        for name in departments {
            if names_match(name, &rules.core_department)
                || names_match(name, &rules.advisory_department)
                || regular.iter().any(|seen| names_match(seen, name))
            {
                continue;
            }
            regular.push(name);
        }
        regular.sort_by_key(|name| rules.department_rank(name));

        for name in regular {
            let mut group: Vec<Member> = members
                .iter()
                .filter(|m| names_match(&m.dept, name))
                .cloned()
                .collect();
            group.sort_by_key(|m| rules.role_rank(&m.role));

            if group.is_empty() && rules.empty_groups == EmptyGroups::Skip {
                continue;
            }
            roster.departments.push(DepartmentGroup {
                name: name.clone(),
                members: group,
            });
        }

        roster
    }

    pub fn has_core(&self) -> bool {
        self.president.is_some() || self.vice_president.is_some() || !self.core_others.is_empty()
    }

    /// Number of members placed across all groups.
    pub fn len(&self) -> usize {
        self.president.iter().count()
            + self.vice_president.iter().count()
            + self.core_others.len()
            + self.advisory.len()
            + self.departments.iter().map(|g| g.members.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of every placed member, in render order.
    pub fn member_ids(&self) -> Vec<&str> {
        self.president
            .iter()
            .chain(self.vice_president.iter())
            .chain(self.core_others.iter())
            .chain(self.advisory.iter())
            .chain(self.departments.iter().flat_map(|g| g.members.iter()))
            .map(|m| m.id.as_str())
            .collect()
    }
}

fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn member(id: &str, role: &str, dept: &str) -> Member {
        Member {
            id: id.to_string(),
            name: id.to_string(),
            role: role.to_string(),
            dept: dept.to_string(),
            department_id: None,
            img: String::new(),
        }
    }

    fn names(group: &[Member]) -> Vec<&str> {
        group.iter().map(|m| m.id.as_str()).collect()
    }

    fn depts(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_role_rank_order() {
        let rules = OrderingRules::default();
        assert_eq!(rules.role_rank("Head"), Rank::Ranked(0));
        assert_eq!(rules.role_rank("Vice Head"), Rank::Ranked(1));
        assert_eq!(rules.role_rank("Secretary"), Rank::Ranked(2));
        assert_eq!(rules.role_rank("Vice Secretary"), Rank::Ranked(3));
        assert_eq!(rules.role_rank("Volunteer"), Rank::Unranked);
        assert!(Rank::Ranked(usize::MAX) < Rank::Unranked);
    }

    #[test]
    fn test_vice_head_never_ranks_as_head() {
        let rules = OrderingRules::default();
        let head = rules.role_rank("Head");
        for role in [
            "Vice Head",
            "vice head",
            "VICE HEAD",
            "Sports Vice Head",
            "Vice Head (Media)",
            "Vice Head & Head Coordinator",
        ] {
            assert_ne!(rules.role_rank(role), head, "{role}");
            assert_eq!(rules.role_rank(role), Rank::Ranked(1), "{role}");
        }
    }

    #[test]
    fn test_unrelated_keywords_rank_by_list_order() {
        let rules = OrderingRules::default();
        assert_eq!(rules.role_rank("Secretary and Head of Media"), Rank::Ranked(0));
        assert_eq!(rules.role_rank("Head Secretary"), Rank::Ranked(0));
        assert_eq!(rules.role_rank("Vice Secretary and Head"), Rank::Ranked(0));
        assert_eq!(rules.role_rank("Secretary, Vice Head"), Rank::Ranked(1));

        let order = KeywordOrder::new(["Lead", "Coordinator"]);
        assert_eq!(order.rank("Coordinator and Lead"), Rank::Ranked(0));
    }

    #[test]
    fn test_role_rank_is_case_insensitive_substring() {
        let rules = OrderingRules::default();
        assert_eq!(rules.role_rank("Department head"), Rank::Ranked(0));
        assert_eq!(rules.role_rank("Joint vice secretary"), Rank::Ranked(3));
    }

    #[test]
    fn test_department_rank() {
        let rules = OrderingRules::default();
        assert_eq!(rules.department_rank("Advisory"), Rank::Ranked(0));
        assert_eq!(rules.department_rank("Technical"), Rank::Ranked(6));
        assert_eq!(rules.department_rank("Sports Department"), Rank::Ranked(4));
        assert_eq!(rules.department_rank("Alumni"), Rank::Unranked);
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        let order = KeywordOrder::new(["", "Lead"]);
        assert_eq!(order.rank("anything"), Rank::Unranked);
        assert_eq!(order.rank("Team Lead"), Rank::Ranked(1));
    }

    #[test]
    fn test_scenario_core_and_sports() {
        let members = vec![
            member("A", "President", "Core"),
            member("B", "Vice President", "Core"),
            member("C", "Head", "Sports"),
            member("D", "Vice Head", "Sports"),
        ];
        let roster = Roster::group(&members, &depts(&["Core", "Sports"]), &OrderingRules::default());

        assert_eq!(roster.president.as_ref().map(|m| m.id.as_str()), Some("A"));
        assert_eq!(roster.vice_president.as_ref().map(|m| m.id.as_str()), Some("B"));
        assert!(roster.core_others.is_empty());
        assert_eq!(roster.departments.len(), 1);
        assert_eq!(roster.departments[0].name, "Sports");
        assert_eq!(names(&roster.departments[0].members), ["C", "D"]);
    }

    #[test]
    fn test_members_sorted_by_role_then_source_order() {
        let members = vec![
            member("v1", "Volunteer", "Media Department"),
            member("s1", "Secretary", "Media Department"),
            member("vh", "Vice Head", "Media Department"),
            member("v2", "Volunteer", "Media Department"),
            member("h", "Head", "Media Department"),
        ];
        let roster = Roster::group(&members, &depts(&["Media Department"]), &OrderingRules::default());
        assert_eq!(names(&roster.departments[0].members), ["h", "vh", "s1", "v1", "v2"]);
    }

    #[test]
    fn test_departments_follow_configured_order_then_encounter_order() {
        let departments = depts(&[
            "Zeta Club",
            "Technical",
            "Core",
            "Alpha Club",
            "Media Department",
            "Advisory",
            "Management Department",
        ]);
        let roster = Roster::group(&[], &departments, &OrderingRules::default());
        let order: Vec<&str> = roster.departments.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            order,
            ["Management Department", "Media Department", "Technical", "Zeta Club", "Alpha Club"]
        );
    }

    #[test]
    fn test_empty_groups_placeholder_and_skip() {
        let members = vec![member("h", "Head", "Technical")];
        let departments = depts(&["Technical", "Media Department"]);

        let kept = Roster::group(&members, &departments, &OrderingRules::default());
        assert_eq!(kept.departments.len(), 2);
        assert!(kept.departments[0].is_empty());
        assert_eq!(kept.departments[0].name, "Media Department");

        let rules = OrderingRules::default().with_empty_groups(EmptyGroups::Skip);
        let skipped = Roster::group(&members, &departments, &rules);
        assert_eq!(skipped.departments.len(), 1);
        assert_eq!(skipped.departments[0].name, "Technical");
    }

    #[test]
    fn test_core_extras_and_advisory() {
        let members = vec![
            member("adv1", "Faculty Advisor", "Advisory"),
            member("vp", "Vice President", "Core"),
            member("gs", "General Secretary", "Core"),
            member("p", "president", "core"),
            member("adv2", "Mentor", "Advisory"),
            member("p2", "President", "Core"),
        ];
        let roster = Roster::group(
            &members,
            &depts(&["Core", "Advisory"]),
            &OrderingRules::default(),
        );
        assert_eq!(roster.president.as_ref().map(|m| m.id.as_str()), Some("p"));
        assert_eq!(roster.vice_president.as_ref().map(|m| m.id.as_str()), Some("vp"));
        assert_eq!(names(&roster.core_others), ["gs", "p2"]);
        assert_eq!(names(&roster.advisory), ["adv1", "adv2"]);
        assert!(roster.departments.is_empty());
        assert!(roster.has_core());
    }

    #[test]
    fn test_unlisted_departments_are_not_placed() {
        let members = vec![
            member("p", "President", "Core"),
            member("x", "Head", "Unknown"),
            member("a", "Advisor", "Advisory"),
        ];
        let roster = Roster::group(&members, &depts(&["Technical"]), &OrderingRules::default());
        assert!(roster.is_empty());
        assert!(!roster.has_core());
    }

    #[test]
    fn test_duplicate_department_names_render_once() {
        let members = vec![member("h", "Head", "Technical")];
        let roster = Roster::group(
            &members,
            &depts(&["Technical", "technical "]),
            &OrderingRules::default(),
        );
        assert_eq!(roster.departments.len(), 1);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_partition_property() {
        let pool = [
            ("President", "Core"),
            ("Vice President", "Core"),
            ("Treasurer", "Core"),
            ("President", "Core"),
            ("Advisor", "Advisory"),
            ("Head", "Technical"),
            ("Vice Head", "technical"),
            ("Volunteer", "Media Department"),
            ("Secretary", "Sports Department"),
            ("Head", "Unknown"),
            ("Vice Secretary", "Alumni"),
        ];
        let department_sets = [
            depts(&["Core", "Advisory", "Technical", "Media Department", "Sports Department"]),
            depts(&["Technical", "Alumni"]),
            depts(&["Core"]),
            depts(&[]),
            depts(&["Advisory", "Sports Department", "Core", "Alumni", "Technical"]),
        ];

        for size in 0..=pool.len() {
            for rotate in 0..pool.len() {
                let members: Vec<Member> = (0..size)
                    .map(|i| {
                        let (role, dept) = pool[(i + rotate) % pool.len()];
                        member(&format!("m{i}"), role, dept)
                    })
                    .collect();

                for departments in &department_sets {
                    for empty in [EmptyGroups::Placeholder, EmptyGroups::Skip] {
                        let rules = OrderingRules::default().with_empty_groups(empty);
                        let roster = Roster::group(&members, departments, &rules);

                        let placed = roster.member_ids();
                        let unique: HashSet<&str> = placed.iter().copied().collect();
                        assert_eq!(unique.len(), placed.len(), "member placed twice");

                        let expected = members
                            .iter()
                            .filter(|m| departments.iter().any(|d| names_match(d, &m.dept)))
                            .count();
                        assert_eq!(placed.len(), expected, "member dropped");
                        assert_eq!(roster.len(), expected);

                        assert_eq!(roster, Roster::group(&members, departments, &rules));
                    }
                }
            }
        }
    }

    #[test]
    fn test_rules_from_custom_config() {
        let config = RosterConfig {
            role_order: vec!["Captain".into(), "Vice Captain".into()],
            department_order: vec!["Football".into(), "Chess".into()],
            core_department: "Board".into(),
            advisory_department: "Mentors".into(),
            empty_groups: EmptyGroups::Skip,
        };
        let rules = OrderingRules::from_config(&config);
        let members = vec![
            member("vc", "Vice Captain", "Football"),
            member("c", "Captain", "Football"),
            member("chair", "President", "Board"),
            member("chess", "Captain", "Chess"),
        ];
        let roster = Roster::group(
            &members,
            &depts(&["Chess", "Board", "Football", "Empty"]),
            &rules,
        );
        assert_eq!(roster.president.as_ref().map(|m| m.id.as_str()), Some("chair"));
        let order: Vec<&str> = roster.departments.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(order, ["Football", "Chess"]);
        assert_eq!(names(&roster.departments[0].members), ["c", "vc"]);
    }
}
