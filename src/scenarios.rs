//! Sample conversations for trying out the assistant by hand.

/// A named group of example user messages.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub queries: &'static [&'static str],
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "Confused user",
        queries: &[
            "I need some help",
            "Something about a company",
            "I'm not sure what I need exactly",
            "Maybe research?",
        ],
    },
    Scenario {
        name: "Efficient user",
        queries: &[
            "Create account plan for Salesforce. Focus: enterprise segment, recent acquisitions, key decision makers, competitive position. Export as JSON.",
            "Research Microsoft Azure revenue 2024",
            "Quick summary: Apple's health initiatives",
        ],
    },
    Scenario {
        name: "Chatty user",
        queries: &[
            "Hey! How are you? I'm having a great day. Oh by the way, I need to research Tesla",
            "That's interesting! You know, I read an article about Elon Musk yesterday...",
            "Anyway, what were we talking about? Oh right, the company research!",
        ],
    },
    Scenario {
        name: "Edge cases",
        queries: &[
            "!@#$%^&*()",
            "Research CompanyThatDoesNotExist123456",
            "Give me the CEO's personal email and phone number",
            "asdfghjkl",
        ],
    },
    Scenario {
        name: "Recommended",
        queries: &[
            "Research Tesla and create a comprehensive account plan",
            "Tell me about Google's recent AI initiatives",
            "Create an account plan for Amazon focused on AWS",
            "Who are the key decision makers at Microsoft?",
            "I'm finding conflicting information about Apple's revenue. Can you verify?",
            "What are the main pain points for Salesforce customers?",
            "Compare Nvidia vs AMD in the AI chip market",
        ],
    },
];

/// Numbered listing of every scenario.
pub fn render() -> String {
    let rule = "=".repeat(60);
    let mut out = format!("Company Research Assistant - Demo Scenarios\n{rule}\n");
    for (n, scenario) in SCENARIOS.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {}\n{}\n",
            n + 1,
            scenario.name.to_uppercase(),
            "-".repeat(60)
        ));
        for query in scenario.queries {
            out.push_str(&format!("   User: {query}\n"));
        }
    }
    out.push_str(&format!("\n{rule}\nRun `account-plan-assistant chat` to try them.\n"));
    out
}
