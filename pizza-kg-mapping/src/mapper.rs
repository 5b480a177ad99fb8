//! Mapping driver

use std::fmt;

use pizza_graph_ir::Graph;
use pizza_kg_tabular::ColumnBatch;
use pizza_kg_vocab::namespaces;
use tracing::info;

use crate::error::MappingResult;
use crate::minter::UriMinter;
use crate::plan::{MappingPlan, MappingRule};
use crate::registry::UriRegistry;
use crate::rules::{self, CapitalPredicates, RuleStats};

/// Outcome of one rule within a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReport {
    pub rule: String,
    pub emitted: usize,
    pub skipped: usize,
}

/// Summary of a mapping run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingReport {
    pub rows: usize,
    pub rules: Vec<RuleReport>,
    /// Distinct entities minted during the run
    pub entities: usize,
    /// Statements appended, before set-semantics deduplication
    pub statements: usize,
}

impl fmt::Display for MappingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows, {} rules, {} entities, {} statements",
            self.rows,
            self.rules.len(),
            self.entities,
            self.statements
        )
    }
}

/// Applies a [`MappingPlan`] to a table.
///
/// The mapper owns the registry and the statement collection of one run.
/// Running several plans or batches through the same mapper shares the
/// registry, so an entity keeps its identifier across them.
pub struct Mapper<M> {
    minter: M,
    registry: UriRegistry,
    graph: Graph,
}

impl<M: UriMinter> Mapper<M> {
    pub fn new(minter: M) -> Self {
        Self {
            minter,
            registry: UriRegistry::new(),
            graph: Graph::new(),
        }
    }

    pub fn minter(&self) -> &M {
        &self.minter
    }

    pub fn registry(&self) -> &UriRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Validate `plan` against `batch`, then apply its rules in order
    pub fn run(&mut self, plan: &MappingPlan, batch: &ColumnBatch) -> MappingResult<MappingReport> {
        plan.validate(batch)?;

        self.graph.add_prefix(plan.prefix.clone(), plan.namespace.clone());
        for (prefix, ns) in namespaces::STANDARD_PREFIXES {
            self.graph.add_prefix(*prefix, *ns);
        }

        let capital = CapitalPredicates::in_namespace(&plan.namespace);
        let entities_before = self.registry.len();
        let statements_before = self.graph.len();
        let mut report = MappingReport {
            rows: batch.num_rows,
            ..Default::default()
        };

        for rule in &plan.rules {
            let stats = self.apply(plan, &capital, rule, batch)?;
            info!(
                rule = %rule,
                emitted = stats.emitted,
                skipped = stats.skipped,
                "applied mapping rule"
            );
            report.rules.push(RuleReport {
                rule: rule.to_string(),
                emitted: stats.emitted,
                skipped: stats.skipped,
            });
        }

        report.entities = self.registry.len() - entities_before;
        report.statements = self.graph.len() - statements_before;
        info!(
            rows = report.rows,
            entities = report.entities,
            statements = report.statements,
            "mapping complete"
        );
        Ok(report)
    }

    fn apply(
        &mut self,
        plan: &MappingPlan,
        capital: &CapitalPredicates,
        rule: &MappingRule,
        batch: &ColumnBatch,
    ) -> MappingResult<RuleStats> {
        match rule {
            MappingRule::Type { subject, class } => rules::map_types(
                batch,
                subject,
                &plan.resolve_term(class),
                &mut self.registry,
                &self.minter,
                &mut self.graph,
            ),
            MappingRule::Literal {
                subject,
                object,
                predicate,
                datatype,
            } => rules::map_literal(
                batch,
                subject,
                object,
                &plan.resolve_term(predicate),
                &plan.resolve_datatype(datatype),
                &self.registry,
                &mut self.graph,
            ),
            MappingRule::Object {
                subject,
                object,
                predicate,
            } => rules::map_object(
                batch,
                subject,
                object,
                &plan.resolve_term(predicate),
                &self.registry,
                &mut self.graph,
            ),
            MappingRule::Capital {
                subject,
                object,
                value,
            } => rules::map_capital(
                batch,
                subject,
                object,
                value,
                capital,
                &self.registry,
                &mut self.graph,
            ),
        }
    }
}

impl<M> fmt::Debug for Mapper<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("entities", &self.registry.len())
            .field("statements", &self.graph.len())
            .finish()
    }
}
