//! Static curriculum catalog: module identifiers, phases, and page content.

use std::fmt;

/// Opaque identifier for a curriculum module (`module-5` through `module-11`).
///
/// The string form is the navigation token the dashboard hands to the
/// screen coordinator; it round-trips the exact literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleId(u8);

/// Lowest valid module number; `module-5` is phase 1.
const MODULE_MIN: u8 = 5;

impl ModuleId {
    /// Parse a module identifier from its exact literal form, e.g. `"module-7"`.
    pub fn parse(s: &str) -> Option<Self> {
        let n = match s {
            "module-5" => 5,
            "module-6" => 6,
            "module-7" => 7,
            "module-8" => 8,
            "module-9" => 9,
            "module-10" => 10,
            "module-11" => 11,
            _ => return None,
        };
        Some(Self(n))
    }

    /// The exact literal this identifier serializes to.
    pub fn as_str(&self) -> &'static str {
        match self.0 {
            5 => "module-5",
            6 => "module-6",
            7 => "module-7",
            8 => "module-8",
            9 => "module-9",
            10 => "module-10",
            11 => "module-11",
            _ => unreachable!("module numbers are bounded at construction"),
        }
    }

    /// Curriculum phase this module belongs to (1-based).
    pub fn phase_number(&self) -> u8 {
        self.0 - MODULE_MIN + 1
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One topic block on a phase page.
#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub title: &'static str,
    pub detail: &'static str,
}

/// One stage of the curriculum, presented as one informational screen.
#[derive(Debug, Clone, Copy)]
pub struct Phase {
    pub number: u8,
    pub module: ModuleId,
    pub title: &'static str,
    pub duration: &'static str,
    pub summary: &'static str,
    /// Full topic breakdown; empty for phases that only have a summary page.
    pub topics: &'static [Topic],
}

impl Phase {
    /// Whether this phase has a full curriculum breakdown or just a summary.
    pub fn has_detail(&self) -> bool {
        !self.topics.is_empty()
    }
}

/// The full phase catalog, in dashboard display order.
pub static CATALOG: [Phase; 7] = [
    Phase {
        number: 1,
        module: ModuleId(5),
        title: "Programming Fundamentals",
        duration: "4 weeks",
        summary: "Variables, control flow, functions, and your first programs. \
                  Builds the vocabulary every later phase assumes.",
        topics: &[],
    },
    Phase {
        number: 2,
        module: ModuleId(6),
        title: "Data Structures & Algorithms",
        duration: "5 weeks",
        summary: "Lists, maps, trees, and the classic algorithms over them, \
                  with an emphasis on picking the right structure for the job.",
        topics: &[],
    },
    Phase {
        number: 3,
        module: ModuleId(7),
        title: "Frontend Web Development",
        duration: "6 weeks",
        summary: "Everything between the markup and the user: layout, \
                  componentized UI, and client-side state.",
        topics: &[
            Topic {
                title: "Semantic HTML & Accessibility",
                detail: "Document structure, landmarks, ARIA basics, and keyboard-first navigation.",
            },
            Topic {
                title: "CSS Layout Systems",
                detail: "Flexbox and grid, responsive breakpoints, and design-token driven theming.",
            },
            Topic {
                title: "Component Architecture",
                detail: "Breaking screens into reusable components with one-directional data flow.",
            },
            Topic {
                title: "Client-Side State",
                detail: "Local vs. lifted state, derived data, and when a store is worth it.",
            },
        ],
    },
    Phase {
        number: 4,
        module: ModuleId(8),
        title: "Backend & APIs",
        duration: "6 weeks",
        summary: "Designing and building the services your frontend talks to.",
        topics: &[
            Topic {
                title: "HTTP & REST Design",
                detail: "Resources, verbs, status codes, and versioning an API you can live with.",
            },
            Topic {
                title: "Authentication & Sessions",
                detail: "Password storage, token-based auth, and session lifecycle management.",
            },
            Topic {
                title: "Service Architecture",
                detail: "Routing, middleware, and separating transport from business logic.",
            },
            Topic {
                title: "Testing Services",
                detail: "Unit tests at the seams, integration tests against a real server.",
            },
        ],
    },
    Phase {
        number: 5,
        module: ModuleId(9),
        title: "Databases & Persistence",
        duration: "4 weeks",
        summary: "Relational modelling, SQL, migrations, and talking to a \
                  database safely from application code.",
        topics: &[],
    },
    Phase {
        number: 6,
        module: ModuleId(10),
        title: "Systems & DevOps",
        duration: "5 weeks",
        summary: "What happens after the code works on your machine.",
        topics: &[
            Topic {
                title: "The Command Line",
                detail: "Shells, processes, pipes, and automating the boring parts.",
            },
            Topic {
                title: "Containers",
                detail: "Images, layers, and reproducible runtime environments.",
            },
            Topic {
                title: "CI/CD Pipelines",
                detail: "Automated build, test, and deploy on every push.",
            },
            Topic {
                title: "Observability",
                detail: "Structured logs, health checks, and knowing when production is on fire.",
            },
        ],
    },
    Phase {
        number: 7,
        module: ModuleId(11),
        title: "Capstone Project",
        duration: "8 weeks",
        summary: "A full product, built end to end in a small team.",
        topics: &[
            Topic {
                title: "Scoping & Planning",
                detail: "Turning an idea into a cut-down MVP with a believable timeline.",
            },
            Topic {
                title: "Team Workflow",
                detail: "Branching strategy, code review, and keeping main releasable.",
            },
            Topic {
                title: "Build & Iterate",
                detail: "Weekly demos, user feedback, and ruthless re-prioritization.",
            },
            Topic {
                title: "Presentation Day",
                detail: "Demoing the product and defending the engineering choices behind it.",
            },
        ],
    },
];

/// Look up the phase a module identifier navigates to.
pub fn phase_for(module: ModuleId) -> &'static Phase {
    &CATALOG[(module.0 - MODULE_MIN) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_module_id_round_trips_literals() {
        for n in 5..=11u8 {
            let literal = format!("module-{n}");
            let id = ModuleId::parse(&literal).expect("valid module id");
            assert_eq!(id.as_str(), literal);
        }
    }

    #[test]
    fn test_module_id_rejects_unknown_tokens() {
        for bad in ["module-4", "module-12", "module-", "phase-7", "", "module-07"] {
            assert!(ModuleId::parse(bad).is_none(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_catalog_enumerates_all_modules_in_order() {
        let ids: Vec<&str> = CATALOG.iter().map(|p| p.module.as_str()).collect();
        assert_eq!(
            ids,
            [
                "module-5",
                "module-6",
                "module-7",
                "module-8",
                "module-9",
                "module-10",
                "module-11",
            ]
        );
    }

    #[test]
    fn test_phase_lookup_matches_numbering() {
        let id = ModuleId::parse("module-7").unwrap();
        let phase = phase_for(id);
        assert_eq!(phase.number, 3);
        assert_eq!(phase.number, id.phase_number());
        assert_eq!(phase.module, id);
    }

    #[test]
    fn test_detailed_phases() {
        let detailed: Vec<u8> = CATALOG
            .iter()
            .filter(|p| p.has_detail())
            .map(|p| p.number)
            .collect();
        assert_eq!(detailed, [3, 4, 6, 7]);
    }
}
