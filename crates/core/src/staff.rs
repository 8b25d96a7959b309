//! Staff and the task-forwarding chain.
//!
//! Each employee accepts exactly the tasks of their role. A [`StaffChain`]
//! offers a task to its links in order; the first link that accepts it
//! performs it and the rest never see it. Managers accept anything, so a
//! manager at the end of a chain catches whatever the others pass on.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::output::{Message, Sink};
use crate::types::{EmployeeId, StaffRole};

/// Task a waiter accepts.
pub const TAKE_ORDER: &str = "Take order";
/// Task a chef accepts.
pub const COOK_DISH: &str = "Cook dish";

/// A staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: StaffRole,
    #[serde(default)]
    pub experience_years: u32,
}

impl Employee {
    #[must_use]
    pub fn new(id: EmployeeId, name: impl Into<String>, role: StaffRole) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            experience_years: 0,
        }
    }

    #[must_use]
    pub fn waiter(id: EmployeeId, name: impl Into<String>) -> Self {
        Self::new(id, name, StaffRole::Waiter)
    }

    #[must_use]
    pub fn chef(id: EmployeeId, name: impl Into<String>) -> Self {
        Self::new(id, name, StaffRole::Chef)
    }

    #[must_use]
    pub fn manager(id: EmployeeId, name: impl Into<String>) -> Self {
        Self::new(id, name, StaffRole::Manager)
    }

    #[must_use]
    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience_years = years;
        self
    }

    /// Whether this employee accepts `task`.
    #[must_use]
    pub fn handles(&self, task: &str) -> bool {
        match self.role {
            StaffRole::Waiter => task == TAKE_ORDER,
            StaffRole::Chef => task == COOK_DISH,
            StaffRole::Manager => true,
        }
    }

    /// Perform `task` alone, without forwarding. Returns false if declined.
    pub fn perform(&self, task: &str, sink: &mut dyn Sink) -> bool {
        if !self.handles(task) {
            debug!(employee = %self.name, role = %self.role, task, "Task declined");
            return false;
        }
        sink.emit(Message::TaskPerformed {
            role: self.role,
            name: self.name.clone(),
            task: task.to_owned(),
        });
        true
    }
}

/// What happened to a task offered to a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskOutcome {
    /// Who performed the task; `None` if every link passed.
    pub handled_by: Option<EmployeeId>,
    /// Links that passed the task on before it was handled or dropped.
    pub passed_over: usize,
}

impl TaskOutcome {
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        self.handled_by.is_some()
    }
}

/// Employees in forwarding order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaffChain {
    links: Vec<Employee>,
}

impl StaffChain {
    #[must_use]
    pub const fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn then(mut self, employee: Employee) -> Self {
        self.links.push(employee);
        self
    }

    /// Append a link at the end of the chain.
    pub fn push(&mut self, employee: Employee) {
        self.links.push(employee);
    }

    #[must_use]
    pub fn links(&self) -> &[Employee] {
        &self.links
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// First employee with the given role.
    #[must_use]
    pub fn first_with_role(&self, role: StaffRole) -> Option<&Employee> {
        self.links.iter().find(|e| e.role == role)
    }

    /// Offer `task` to each link in order until one performs it.
    ///
    /// A task nobody accepts is dropped without any user-facing message.
    pub fn handle_task(&self, task: &str, sink: &mut dyn Sink) -> TaskOutcome {
        for (passed_over, employee) in self.links.iter().enumerate() {
            if employee.perform(task, sink) {
                return TaskOutcome {
                    handled_by: Some(employee.id),
                    passed_over,
                };
            }
        }
        debug!(task, links = self.links.len(), "Task dropped by every link");
        TaskOutcome {
            handled_by: None,
            passed_over: self.links.len(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::output::Transcript;

    fn default_chain() -> StaffChain {
        StaffChain::new()
            .then(Employee::waiter(EmployeeId::new(1), "Alice"))
            .then(Employee::chef(EmployeeId::new(2), "Charlie"))
            .then(Employee::manager(EmployeeId::new(3), "Bob"))
    }

    #[test]
    fn test_waiter_takes_order() {
        let mut out = Transcript::new();
        let outcome = default_chain().handle_task(TAKE_ORDER, &mut out);
        assert_eq!(outcome.handled_by, Some(EmployeeId::new(1)));
        assert_eq!(outcome.passed_over, 0);
    }

    #[test]
    fn test_chef_cooks() {
        let mut out = Transcript::new();
        let outcome = default_chain().handle_task(COOK_DISH, &mut out);
        assert_eq!(outcome.handled_by, Some(EmployeeId::new(2)));
        assert_eq!(outcome.passed_over, 1);
    }

    #[test]
    fn test_manager_catches_everything_else() {
        let mut out = Transcript::new();
        let outcome = default_chain().handle_task("Inspect the kitchen", &mut out);
        assert_eq!(outcome.handled_by, Some(EmployeeId::new(3)));
        assert_eq!(
            out.messages(),
            &[Message::TaskPerformed {
                role: StaffRole::Manager,
                name: "Bob".to_owned(),
                task: "Inspect the kitchen".to_owned(),
            }]
        );
    }

    #[test]
    fn test_only_last_of_n_handles() {
        let n = 5;
        let mut chain = StaffChain::new();
        for i in 0..n - 1 {
            chain.push(Employee::waiter(EmployeeId::new(i), format!("Waiter {i}")));
        }
        chain.push(Employee::chef(EmployeeId::new(n - 1), "Last"));

        let mut out = Transcript::new();
        let outcome = chain.handle_task(COOK_DISH, &mut out);

        assert_eq!(outcome.handled_by, Some(EmployeeId::new(n - 1)));
        assert_eq!(outcome.passed_over, 4);
        assert_eq!(out.count(|m| matches!(m, Message::TaskPerformed { .. })), 1);
    }

    #[test]
    fn test_unmatched_task_is_dropped_silently() {
        let chain = StaffChain::new()
            .then(Employee::waiter(EmployeeId::new(1), "Alice"))
            .then(Employee::chef(EmployeeId::new(2), "Charlie"));
        let mut out = Transcript::new();

        let outcome = chain.handle_task("Fix the sink", &mut out);

        assert!(!outcome.is_handled());
        assert_eq!(outcome.passed_over, 2);
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_chain_drops_task() {
        let mut out = Transcript::new();
        let outcome = StaffChain::new().handle_task(TAKE_ORDER, &mut out);
        assert_eq!(outcome, TaskOutcome { handled_by: None, passed_over: 0 });
    }

    #[test]
    fn test_perform_does_not_forward() {
        let waiter = Employee::waiter(EmployeeId::new(1), "Alice");
        let mut out = Transcript::new();
        assert!(!waiter.perform(COOK_DISH, &mut out));
        assert!(out.is_empty());
    }
}
