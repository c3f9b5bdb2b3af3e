//! Cucumber step definition rendering

use crate::config::RenderConfig;
use crate::naming::{annotation, class_name, method_name};
use crate::renderer::StoryRenderer;
use indexmap::IndexSet;
use std::fmt;
use storygen_model::Story;

/// Step texts in first-seen order
///
/// Each criterion contributes its Given, then When, then Then statements.
#[must_use]
pub fn unique_steps(story: &Story) -> IndexSet<&str> {
    story
        .acceptance_criteria()
        .iter()
        .flat_map(|criterion| criterion.steps().map(|(_, statement)| statement))
        .collect()
}

/// Renders a Java class of pending Cucumber step stubs
///
/// The class wires a `MultiServiceTestHarness` over the story's topology in
/// `@Before` and tears it down in `@After`. Every stub throws
/// `PendingException`.
#[derive(Debug, Clone, Default)]
pub struct StepDefinitionRenderer {
    config: RenderConfig,
}

impl StepDefinitionRenderer {
    /// Create renderer for the given packages
    #[inline]
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Packages in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Single pending step method, followed by a blank line
    #[must_use]
    pub fn step_method(&self, step: &str) -> String {
        StepMethod(step).to_string()
    }
}

impl StoryRenderer for StepDefinitionRenderer {
    const EXTENSION: &'static str = "java";

    fn render(&self, story: &Story) -> String {
        let steps = unique_steps(story);
        tracing::debug!(
            unique_steps = steps.len(),
            package = %self.config.package_name,
            "rendering step definitions"
        );
        StepClass {
            story,
            config: &self.config,
            steps: &steps,
        }
        .to_string()
    }
}

struct StepClass<'a> {
    story: &'a Story,
    config: &'a RenderConfig,
    steps: &'a IndexSet<&'a str>,
}

impl fmt::Display for StepClass<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = class_name(self.story.value_statement().goal());
        let harness = &self.config.harness_package;

        writeln!(f, "package {};", self.config.package_name)?;
        writeln!(f)?;
        writeln!(f, "import java.util.Arrays;")?;
        writeln!(f, "import java.util.List;")?;
        writeln!(f, "import io.cucumber.java.en.*;")?;
        writeln!(f, "import io.cucumber.java.Before;")?;
        writeln!(f, "import io.cucumber.java.After;")?;
        writeln!(f, "import static org.junit.jupiter.api.Assertions.*;")?;
        writeln!(f, "import {harness}.TestContext;")?;
        writeln!(f, "import {harness}.MultiServiceTestHarness;")?;
        writeln!(f)?;

        writeln!(f, "public class {class} {{")?;
        writeln!(f)?;
        writeln!(f, "    private TestContext context;")?;
        writeln!(f, "    private MultiServiceTestHarness harness;")?;
        writeln!(f)?;

        writeln!(f, "    public {class}(TestContext context) {{")?;
        writeln!(f, "        this.context = context;")?;
        writeln!(f, "    }}")?;
        writeln!(f)?;

        let topology = self.story.topology();
        writeln!(f, "    @Before")?;
        writeln!(f, "    public void setUp() throws Exception {{")?;
        writeln!(f, "        List<String> services = {};", ListOf(topology.services()))?;
        writeln!(f, "        List<String> events = {};", ListOf(topology.events()))?;
        writeln!(f, "        harness = new MultiServiceTestHarness(services, events);")?;
        writeln!(f, "        harness.setup();")?;
        writeln!(f, "        context.setHarness(harness);")?;
        writeln!(f, "    }}")?;
        writeln!(f)?;

        writeln!(f, "    @After")?;
        writeln!(f, "    public void tearDown() throws Exception {{")?;
        writeln!(f, "        if (harness != null) {{")?;
        writeln!(f, "            harness.teardown();")?;
        writeln!(f, "        }}")?;
        writeln!(f, "    }}")?;
        writeln!(f)?;

        for step in self.steps {
            StepMethod(step).fmt(f)?;
        }

        writeln!(f, "}}")
    }
}

struct StepMethod<'a>(&'a str);

impl fmt::Display for StepMethod<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.0;
        writeln!(f, "    @{}({})", annotation(step), JavaString(step))?;
        writeln!(f, "    public void {}() {{", method_name(step))?;
        writeln!(f, "        // TODO: Implement this step")?;
        writeln!(f, "        // Available: harness.getService(\"serviceName\")")?;
        writeln!(f, "        //           harness.waitForEvent(\"eventType\", timeoutSeconds)")?;
        writeln!(f, "        //           harness.verifyEventNotPublished(\"eventType\")")?;
        writeln!(f, "        //           context.set(\"key\", value)")?;
        writeln!(f, "        throw new io.cucumber.java.PendingException();")?;
        writeln!(f, "    }}")?;
        writeln!(f)
    }
}

/// `Arrays.asList(...)` over string literals
struct ListOf<'a>(&'a [String]);

impl fmt::Display for ListOf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Arrays.asList(")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            JavaString(item).fmt(f)?;
        }
        f.write_str(")")
    }
}

/// Double-quoted Java string literal
struct JavaString<'a>(&'a str);

impl fmt::Display for JavaString<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use storygen_model::{Requirement, ValueStatement};
    use storygen_test_utils::{create_minimal_story, create_test_story, criterion};

    const PENDING_BODY: &str = "        // TODO: Implement this step\n\
        \x20       // Available: harness.getService(\"serviceName\")\n\
        \x20       //           harness.waitForEvent(\"eventType\", timeoutSeconds)\n\
        \x20       //           harness.verifyEventNotPublished(\"eventType\")\n\
        \x20       //           context.set(\"key\", value)\n\
        \x20       throw new io.cucumber.java.PendingException();\n\
        \x20   }\n\
        \n";

    #[test]
    fn step_method_layout() {
        let method = StepDefinitionRenderer::default().step_method("the payment is captured");
        assert_eq!(
            method,
            format!(
                "    @Given(\"the payment is captured\")\n    public void thePaymentIsCaptured() {{\n{PENDING_BODY}"
            )
        );
    }

    #[test]
    fn quotes_in_steps_are_escaped() {
        let method = StepDefinitionRenderer::default()
            .step_method(r#"the "paymentRejected" event is published"#);
        assert!(method.starts_with(
            "    @Given(\"the \\\"paymentRejected\\\" event is published\")\n    public void theParamEventIsPublished() {\n"
        ));
    }

    #[test]
    fn backslashes_are_escaped() {
        assert_eq!(JavaString(r"a\b").to_string(), r#""a\\b""#);
    }

    #[test]
    fn unique_steps_first_seen_order() {
        let story = Story::new(
            ValueStatement::new("user", "goal", "benefit."),
            vec![],
            vec![
                criterion("one", &["shared"], &["act"], &["check"]),
                criterion("two", &["other"], &["act"], &["shared"]),
            ],
        );
        let steps: Vec<&str> = unique_steps(&story).into_iter().collect();
        assert_eq!(steps, ["shared", "act", "check", "other"]);
    }

    #[test]
    fn renders_full_class() {
        let config = RenderConfig::new()
            .with_package_name("com.example.steps")
            .with_harness_package("com.example.harness");
        let java = StepDefinitionRenderer::new(config).render(&create_test_story());

        let header = "package com.example.steps;\n\
            \n\
            import java.util.Arrays;\n\
            import java.util.List;\n\
            import io.cucumber.java.en.*;\n\
            import io.cucumber.java.Before;\n\
            import io.cucumber.java.After;\n\
            import static org.junit.jupiter.api.Assertions.*;\n\
            import com.example.harness.TestContext;\n\
            import com.example.harness.MultiServiceTestHarness;\n\
            \n\
            public class RejectDuplicateCardPaymentsQuicklySteps {\n\
            \n\
            \x20   private TestContext context;\n\
            \x20   private MultiServiceTestHarness harness;\n\
            \n\
            \x20   public RejectDuplicateCardPaymentsQuicklySteps(TestContext context) {\n\
            \x20       this.context = context;\n\
            \x20   }\n\
            \n\
            \x20   @Before\n\
            \x20   public void setUp() throws Exception {\n\
            \x20       List<String> services = Arrays.asList(\"payment gateway\");\n\
            \x20       List<String> events = Arrays.asList(\"paymentRejected\");\n\
            \x20       harness = new MultiServiceTestHarness(services, events);\n\
            \x20       harness.setup();\n\
            \x20       context.setHarness(harness);\n\
            \x20   }\n\
            \n\
            \x20   @After\n\
            \x20   public void tearDown() throws Exception {\n\
            \x20       if (harness != null) {\n\
            \x20           harness.teardown();\n\
            \x20       }\n\
            \x20   }\n\
            \n";
        assert!(java.starts_with(header), "unexpected header:\n{java}");
        assert!(java.ends_with(&format!("{PENDING_BODY}}}\n")));

        // "a payment has already been captured" appears in both scenarios
        assert_eq!(java.matches("public void ").count(), 2 + 6);
        assert_eq!(java.matches("@Given(\"a payment has already been captured\")").count(), 1);
        assert!(java.contains("    @When(\"the same payment gets submitted\")\n"));
        assert!(java.contains("    @Then(\"no charge appears\")\n"));
    }

    #[test]
    fn empty_topology_uses_empty_lists() {
        let java = StepDefinitionRenderer::default().render(&create_minimal_story("do it"));
        assert!(java.contains("        List<String> services = Arrays.asList();\n"));
        assert!(java.contains("        List<String> events = Arrays.asList();\n"));
        assert!(java.contains("public class DoItSteps {"));
        assert!(java.starts_with("package acceptance.steps;\n"));
        assert!(java.contains("import acceptance.harness.TestContext;\n"));
    }

    #[test]
    fn list_entries_are_joined_and_escaped() {
        let names = vec!["a".to_string(), "b\"c".to_string()];
        assert_eq!(ListOf(&names).to_string(), r#"Arrays.asList("a", "b\"c")"#);
    }

    #[test]
    fn multiple_services_listed_in_order() {
        let story = Story::new(
            ValueStatement::new("user", "goal", "benefit."),
            vec![
                Requirement::new(1, r#"call the "alpha" service"#),
                Requirement::new(2, r#"call the "beta" service and the "alpha" service"#),
            ],
            vec![],
        );
        let java = StepDefinitionRenderer::default().render(&story);
        assert!(java.contains(r#"List<String> services = Arrays.asList("alpha", "beta");"#));
    }
}
