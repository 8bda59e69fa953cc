//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Bound;

use isisd_yang::YangPath;
use isisd_yang::data::{DataDiff, DataDiffOp, DataNodeRef, DataTree};
use serde::{Deserialize, Serialize};

use crate::debug::Debug;
use crate::error::Error;
use crate::{CallbackKey, CallbackOp, ProviderBase};

// Default priority of configuration callbacks. Changes are applied in
// ascending priority order, and deleted in descending priority order.
pub const PRIORITY_DFLT: u32 = u32::MAX / 2;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
pub enum CommitPhase {
    Validate,
    Prepare,
    Abort,
    Apply,
}

//
// Commit callbacks.
//

pub struct Callbacks<P: Provider>(pub HashMap<String, CallbacksNode<P>>);

pub struct CallbacksNode<P: Provider> {
    pub priority: u32,
    pub create: OpCallbacks<P>,
    pub modify: OpCallbacks<P>,
    pub delete: OpCallbacks<P>,
    pub apply_finish: Option<CallbackApplyFinish<P>>,
}

pub struct OpCallbacks<P: Provider> {
    pub validate: Option<CallbackValidate<P>>,
    pub prepare: Option<CallbackPrepare<P>>,
    pub abort: Option<CallbackAbort<P>>,
    pub apply: Option<CallbackApply<P>>,
}

pub struct CallbacksBuilder<P: Provider> {
    path: Option<YangPath>,
    callbacks: Callbacks<P>,
}

#[derive(Debug)]
pub struct ValidationCallbackArgs<'a> {
    pub old_config: &'a DataTree,
    pub new_config: &'a DataTree,
    pub dnode: DataNodeRef<'a>,
}

#[derive(Debug)]
pub struct ResourceCallbackArgs<'a, P: Provider> {
    pub resource: &'a mut Option<P::Resource>,
    pub dnode: DataNodeRef<'a>,
}

#[derive(Debug)]
pub struct CallbackArgs<'a, P: Provider> {
    pub event_queue: &'a mut BTreeSet<P::Event>,
    // Live object bound to the closest ancestor of the node (the node itself
    // included, unless it's being created).
    pub list_entry: P::ListEntry,
    // Live object to bind to the node being created.
    pub binding: &'a mut Option<P::ListEntry>,
    pub resource: &'a mut Option<P::Resource>,
    pub old_config: &'a DataTree,
    pub new_config: &'a DataTree,
    pub dnode: DataNodeRef<'a>,
}

#[derive(Debug)]
pub struct ApplyFinishArgs<'a, P: Provider> {
    pub event_queue: &'a mut BTreeSet<P::Event>,
    pub list_entry: P::ListEntry,
    pub dnode: DataNodeRef<'a>,
}

//
// Live objects bound to configuration nodes.
//

#[derive(Debug)]
pub struct Bindings<E>(BTreeMap<String, E>);

//
// Datastore holding the running configuration of a provider.
//

#[derive(Debug)]
pub struct Datastore<P: Provider> {
    pub provider: P,
    running: DataTree,
    bindings: Bindings<P::ListEntry>,
}

#[derive(Debug, Default)]
pub struct CommitReport {
    pub changes: usize,
    pub errors: Vec<Error>,
}

//
// Useful type definition(s).
//

pub type ConfigChange = (CallbackKey, String);
pub type ConfigChanges = Vec<ConfigChange>;

pub type CallbackValidate<P> =
    for<'a> fn(&'a P, ValidationCallbackArgs<'a>) -> Result<(), String>;

pub type CallbackPrepare<P> =
    for<'a> fn(&'a P, ResourceCallbackArgs<'a, P>) -> Result<(), String>;

pub type CallbackAbort<P> = for<'a> fn(&'a P, ResourceCallbackArgs<'a, P>);

pub type CallbackApply<P> =
    for<'a> fn(&'a mut P, CallbackArgs<'a, P>) -> Result<(), String>;

pub type CallbackApplyFinish<P> =
    for<'a> fn(&'a mut P, ApplyFinishArgs<'a, P>);

//
// Provider northbound.
//

pub trait Provider: ProviderBase {
    type ListEntry: std::fmt::Debug + Clone + Default;
    type Event: std::fmt::Debug + Eq + Ord;
    type Resource: std::fmt::Debug;

    fn callbacks() -> &'static Callbacks<Self>;

    fn process_event(&mut self, _event: Self::Event) {}
}

// ===== impl Callbacks =====

impl<P> Callbacks<P>
where
    P: Provider,
{
    pub fn get(&self, path: &str) -> Option<&CallbacksNode<P>> {
        self.0.get(path)
    }

    pub fn priority(&self, path: &str) -> u32 {
        self.0
            .get(path)
            .map(|node| node.priority)
            .unwrap_or(PRIORITY_DFLT)
    }

    fn get_op(&self, key: &CallbackKey) -> Option<&OpCallbacks<P>> {
        self.0.get(&key.path).map(|node| node.op(key.operation))
    }

    // Returns the schema paths of all registered nodes.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<P> std::fmt::Debug for Callbacks<P>
where
    P: Provider,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

impl<P> Default for Callbacks<P>
where
    P: Provider,
{
    fn default() -> Self {
        Callbacks(HashMap::new())
    }
}

// ===== impl CallbacksNode =====

impl<P> CallbacksNode<P>
where
    P: Provider,
{
    pub fn op(&self, operation: CallbackOp) -> &OpCallbacks<P> {
        match operation {
            CallbackOp::Create => &self.create,
            CallbackOp::Modify => &self.modify,
            CallbackOp::Delete => &self.delete,
        }
    }

    fn op_mut(&mut self, operation: CallbackOp) -> &mut OpCallbacks<P> {
        match operation {
            CallbackOp::Create => &mut self.create,
            CallbackOp::Modify => &mut self.modify,
            CallbackOp::Delete => &mut self.delete,
        }
    }
}

impl<P> Default for CallbacksNode<P>
where
    P: Provider,
{
    fn default() -> Self {
        CallbacksNode {
            priority: PRIORITY_DFLT,
            create: Default::default(),
            modify: Default::default(),
            delete: Default::default(),
            apply_finish: None,
        }
    }
}

// ===== impl OpCallbacks =====

impl<P> Default for OpCallbacks<P>
where
    P: Provider,
{
    fn default() -> Self {
        OpCallbacks {
            validate: None,
            prepare: None,
            abort: None,
            apply: None,
        }
    }
}

// ===== impl CallbacksBuilder =====

impl<P> CallbacksBuilder<P>
where
    P: Provider,
{
    pub fn new(callbacks: Callbacks<P>) -> Self {
        CallbacksBuilder {
            path: None,
            callbacks,
        }
    }

    // Selects the node the next callbacks refer to. Selecting a node
    // registers it even when no callbacks are loaded for it.
    #[must_use]
    pub fn path(mut self, path: YangPath) -> Self {
        self.path = Some(path);
        self.callbacks.0.entry(path.to_string()).or_default();
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: u32) -> Self {
        self.node().priority = priority;
        self
    }

    #[must_use]
    fn load_validate(
        mut self,
        operation: CallbackOp,
        cb: CallbackValidate<P>,
    ) -> Self {
        self.node().op_mut(operation).validate = Some(cb);
        self
    }

    #[must_use]
    fn load_prepare(
        mut self,
        operation: CallbackOp,
        cb: CallbackPrepare<P>,
    ) -> Self {
        self.node().op_mut(operation).prepare = Some(cb);
        self
    }

    #[must_use]
    fn load_abort(mut self, operation: CallbackOp, cb: CallbackAbort<P>) -> Self {
        self.node().op_mut(operation).abort = Some(cb);
        self
    }

    #[must_use]
    fn load_apply(mut self, operation: CallbackOp, cb: CallbackApply<P>) -> Self {
        self.node().op_mut(operation).apply = Some(cb);
        self
    }

    #[must_use]
    pub fn create_validate(self, cb: CallbackValidate<P>) -> Self {
        self.load_validate(CallbackOp::Create, cb)
    }

    #[must_use]
    pub fn create_prepare(self, cb: CallbackPrepare<P>) -> Self {
        self.load_prepare(CallbackOp::Create, cb)
    }

    #[must_use]
    pub fn create_abort(self, cb: CallbackAbort<P>) -> Self {
        self.load_abort(CallbackOp::Create, cb)
    }

    #[must_use]
    pub fn create_apply(self, cb: CallbackApply<P>) -> Self {
        self.load_apply(CallbackOp::Create, cb)
    }

    #[must_use]
    pub fn modify_validate(self, cb: CallbackValidate<P>) -> Self {
        self.load_validate(CallbackOp::Modify, cb)
    }

    #[must_use]
    pub fn modify_prepare(self, cb: CallbackPrepare<P>) -> Self {
        self.load_prepare(CallbackOp::Modify, cb)
    }

    #[must_use]
    pub fn modify_abort(self, cb: CallbackAbort<P>) -> Self {
        self.load_abort(CallbackOp::Modify, cb)
    }

    #[must_use]
    pub fn modify_apply(self, cb: CallbackApply<P>) -> Self {
        self.load_apply(CallbackOp::Modify, cb)
    }

    #[must_use]
    pub fn delete_validate(self, cb: CallbackValidate<P>) -> Self {
        self.load_validate(CallbackOp::Delete, cb)
    }

    #[must_use]
    pub fn delete_prepare(self, cb: CallbackPrepare<P>) -> Self {
        self.load_prepare(CallbackOp::Delete, cb)
    }

    #[must_use]
    pub fn delete_abort(self, cb: CallbackAbort<P>) -> Self {
        self.load_abort(CallbackOp::Delete, cb)
    }

    #[must_use]
    pub fn delete_apply(self, cb: CallbackApply<P>) -> Self {
        self.load_apply(CallbackOp::Delete, cb)
    }

    #[must_use]
    pub fn apply_finish(mut self, cb: CallbackApplyFinish<P>) -> Self {
        self.node().apply_finish = Some(cb);
        self
    }

    #[must_use]
    pub fn build(self) -> Callbacks<P> {
        self.callbacks
    }

    fn node(&mut self) -> &mut CallbacksNode<P> {
        let path = self.path.expect("callback path not selected").to_string();
        self.callbacks.0.entry(path).or_default()
    }
}

impl<P> Default for CallbacksBuilder<P>
where
    P: Provider,
{
    fn default() -> Self {
        CallbacksBuilder {
            path: None,
            callbacks: Callbacks::default(),
        }
    }
}

// ===== impl Bindings =====

impl<E> Bindings<E>
where
    E: Clone + Default,
{
    // Returns the live object bound to the given data path.
    pub fn get(&self, path: &str) -> Option<&E> {
        self.0.get(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn bind(&mut self, path: &str, entry: E) {
        self.0.insert(path.to_owned(), entry);
    }

    // Removes the bindings of the given node and all its descendants.
    fn unbind(&mut self, path: &str) {
        let paths = self
            .0
            .range::<str, _>((Bound::Included(path), Bound::Unbounded))
            .map(|(key, _)| key)
            .take_while(|key| key.starts_with(path))
            .filter(|key| {
                key.len() == path.len() || key[path.len()..].starts_with('/')
            })
            .cloned()
            .collect::<Vec<_>>();
        for path in paths {
            self.0.remove(&path);
        }
    }

    // Returns the live object bound to the closest ancestor of the given
    // node.
    fn lookup(&self, dnode: &DataNodeRef<'_>, inclusive: bool) -> E {
        let mut ancestors = dnode.inclusive_ancestors();
        if !inclusive {
            ancestors.next();
        }
        ancestors
            .find_map(|dnode| self.0.get(dnode.path()))
            .cloned()
            .unwrap_or_default()
    }
}

impl<E> Default for Bindings<E> {
    fn default() -> Self {
        Bindings(BTreeMap::new())
    }
}

// ===== impl Datastore =====

impl<P> Datastore<P>
where
    P: Provider,
{
    pub fn new(provider: P) -> Datastore<P> {
        Datastore {
            provider,
            running: DataTree::new(),
            bindings: Default::default(),
        }
    }

    pub fn running(&self) -> &DataTree {
        &self.running
    }

    pub fn bindings(&self) -> &Bindings<P::ListEntry> {
        &self.bindings
    }

    // Commits a candidate configuration, applying the differences relative
    // to the running configuration.
    pub fn commit(
        &mut self,
        candidate: DataTree,
    ) -> Result<CommitReport, Error> {
        let changes = changes_from_diff(&self.running.diff(&candidate));
        self.commit_changes(candidate, changes)
    }

    // Commits a candidate configuration using an explicit list of changes.
    //
    // The candidate replaces the running configuration once the changes
    // are applied. Nothing is changed if any change fails validation or
    // resource allocation.
    pub fn commit_changes(
        &mut self,
        candidate: DataTree,
        mut changes: ConfigChanges,
    ) -> Result<CommitReport, Error> {
        let callbacks = P::callbacks();
        let span = P::debug_span("northbound");
        let _span_guard = span.enter();

        Debug::CommitStart(changes.len()).log();
        sort_changes(callbacks, &mut changes);

        let report = {
            let old_config = &self.running;
            let new_config = &candidate;
            let changes = changes
                .iter()
                .map(|(cb_key, data_path)| {
                    let dnode_config = match cb_key.operation {
                        CallbackOp::Create | CallbackOp::Modify => new_config,
                        CallbackOp::Delete => old_config,
                    };
                    dnode_config
                        .find_path(data_path)
                        .map(|dnode| (cb_key, dnode))
                        .ok_or_else(|| {
                            Error::DataPathNotFound(data_path.clone())
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            // Phase 1: validation.
            validate_changes(
                &self.provider,
                callbacks,
                old_config,
                new_config,
                &changes,
            )?;

            // Phase 2: resource allocation.
            let mut resources =
                prepare_changes(&self.provider, callbacks, &changes)?;

            // Phase 3: apply changes.
            let mut event_queue = BTreeSet::new();
            let errors = apply_changes(
                &mut self.provider,
                &mut self.bindings,
                callbacks,
                old_config,
                new_config,
                &changes,
                &mut resources,
                &mut event_queue,
            );

            // Phase 4: apply_finish callbacks.
            apply_finish(
                &mut self.provider,
                &self.bindings,
                callbacks,
                new_config,
                &changes,
                &mut event_queue,
            );

            // Release unused resources.
            drop(resources);

            // Process the events queued by the callbacks.
            for event in event_queue {
                self.provider.process_event(event);
            }

            CommitReport {
                changes: changes.len(),
                errors,
            }
        };
        Debug::CommitDone(report.changes, report.errors.len()).log();
        self.running = candidate;

        Ok(report)
    }
}

// ===== helper functions =====

// Sorts changes so that deletions come first, in descending priority order,
// followed by creations and modifications in ascending priority order. The
// original order is preserved among changes of the same priority.
fn sort_changes<P>(callbacks: &Callbacks<P>, changes: &mut ConfigChanges)
where
    P: Provider,
{
    changes.sort_by_key(|(cb_key, _)| {
        let priority = i64::from(callbacks.priority(&cb_key.path));
        match cb_key.operation {
            CallbackOp::Delete => (0, -priority),
            CallbackOp::Create | CallbackOp::Modify => (1, priority),
        }
    });
}

fn validate_changes<P>(
    provider: &P,
    callbacks: &Callbacks<P>,
    old_config: &DataTree,
    new_config: &DataTree,
    changes: &[(&CallbackKey, DataNodeRef<'_>)],
) -> Result<(), Error>
where
    P: Provider,
{
    for (cb_key, dnode) in changes {
        let Some(cb) = callbacks.get_op(cb_key).and_then(|cbs| cbs.validate)
        else {
            continue;
        };

        Debug::ConfigurationCallback(
            CommitPhase::Validate,
            cb_key.operation,
            dnode.path(),
        )
        .log();
        let args = ValidationCallbackArgs {
            old_config,
            new_config,
            dnode: *dnode,
        };
        (cb)(provider, args).map_err(Error::ValidationCallback)?;
    }

    Ok(())
}

fn prepare_changes<P>(
    provider: &P,
    callbacks: &Callbacks<P>,
    changes: &[(&CallbackKey, DataNodeRef<'_>)],
) -> Result<Vec<Option<P::Resource>>, Error>
where
    P: Provider,
{
    let mut resources = Vec::with_capacity(changes.len());
    resources.resize_with(changes.len(), Default::default);

    for (idx, (cb_key, dnode)) in changes.iter().enumerate() {
        let Some(cb) = callbacks.get_op(cb_key).and_then(|cbs| cbs.prepare)
        else {
            continue;
        };

        Debug::ConfigurationCallback(
            CommitPhase::Prepare,
            cb_key.operation,
            dnode.path(),
        )
        .log();
        let args = ResourceCallbackArgs {
            resource: &mut resources[idx],
            dnode: *dnode,
        };
        if let Err(error) = (cb)(provider, args) {
            // Release the resources allocated so far.
            abort_changes(
                provider,
                callbacks,
                &changes[..idx],
                &mut resources[..idx],
            );
            return Err(Error::PrepareCallback(error));
        }
    }

    Ok(resources)
}

fn abort_changes<P>(
    provider: &P,
    callbacks: &Callbacks<P>,
    changes: &[(&CallbackKey, DataNodeRef<'_>)],
    resources: &mut [Option<P::Resource>],
) where
    P: Provider,
{
    for ((cb_key, dnode), resource) in changes.iter().zip(resources) {
        let Some(cb) = callbacks.get_op(cb_key).and_then(|cbs| cbs.abort)
        else {
            continue;
        };

        Debug::ConfigurationCallback(
            CommitPhase::Abort,
            cb_key.operation,
            dnode.path(),
        )
        .log();
        let args = ResourceCallbackArgs {
            resource,
            dnode: *dnode,
        };
        (cb)(provider, args);
    }
}

fn apply_changes<P>(
    provider: &mut P,
    bindings: &mut Bindings<P::ListEntry>,
    callbacks: &Callbacks<P>,
    old_config: &DataTree,
    new_config: &DataTree,
    changes: &[(&CallbackKey, DataNodeRef<'_>)],
    resources: &mut [Option<P::Resource>],
    event_queue: &mut BTreeSet<P::Event>,
) -> Vec<Error>
where
    P: Provider,
{
    let mut errors = vec![];

    for ((cb_key, dnode), resource) in changes.iter().zip(resources) {
        let cb = callbacks.get_op(cb_key).and_then(|cbs| cbs.apply);
        if let Some(cb) = cb {
            Debug::ConfigurationCallback(
                CommitPhase::Apply,
                cb_key.operation,
                dnode.path(),
            )
            .log();

            let inclusive = cb_key.operation != CallbackOp::Create;
            let mut binding = None;
            let args = CallbackArgs {
                event_queue: &mut *event_queue,
                list_entry: bindings.lookup(dnode, inclusive),
                binding: &mut binding,
                resource,
                old_config,
                new_config,
                dnode: *dnode,
            };
            if let Err(error) = (cb)(provider, args) {
                let error =
                    Error::Inconsistency(dnode.path().to_owned(), error);
                error.log();
                errors.push(error);
            }
            if let Some(entry) = binding {
                bindings.bind(dnode.path(), entry);
            }
        } else if callbacks.get(&cb_key.path).is_none() {
            Debug::CallbackNotFound(cb_key.operation, &cb_key.path).log();
        }

        if cb_key.operation == CallbackOp::Delete {
            bindings.unbind(dnode.path());
        }
    }

    errors
}

fn apply_finish<P>(
    provider: &mut P,
    bindings: &Bindings<P::ListEntry>,
    callbacks: &Callbacks<P>,
    new_config: &DataTree,
    changes: &[(&CallbackKey, DataNodeRef<'_>)],
    event_queue: &mut BTreeSet<P::Event>,
) where
    P: Provider,
{
    // Collect the nodes whose apply_finish callbacks need to be invoked,
    // sorted by priority.
    let mut finish_nodes = BTreeMap::new();
    for (cb_key, dnode) in changes {
        // Deleted nodes don't have their own callbacks invoked. Their
        // ancestors are looked up in the new configuration.
        let dnode = match cb_key.operation {
            CallbackOp::Create | CallbackOp::Modify => Some(*dnode),
            CallbackOp::Delete => dnode
                .parent()
                .and_then(|parent| new_config.find_path(parent.path())),
        };

        for dnode in dnode.iter().flat_map(|dnode| dnode.inclusive_ancestors())
        {
            let snode = dnode.schema();
            if let Some(node) = callbacks.get(snode.path)
                && let Some(cb) = node.apply_finish
            {
                finish_nodes
                    .entry((node.priority, dnode.path()))
                    .or_insert((cb, dnode));
            }
        }
    }

    for (cb, dnode) in finish_nodes.into_values() {
        Debug::ApplyFinishCallback(dnode.path()).log();
        let args = ApplyFinishArgs {
            event_queue: &mut *event_queue,
            list_entry: bindings.lookup(&dnode, true),
            dnode,
        };
        (cb)(provider, args);
    }
}

// ===== global functions =====

// Builds the list of configuration changes from the differences between two
// data trees.
pub fn changes_from_diff(diff: &DataDiff<'_>) -> ConfigChanges {
    let mut changes = vec![];

    for (op, dnode) in diff.iter() {
        match op {
            DataDiffOp::Create => {
                for dnode in dnode.traverse().filter(|dnode| !dnode.is_default())
                {
                    let snode = dnode.schema();
                    let operation = if CallbackOp::Create.is_valid(snode) {
                        CallbackOp::Create
                    } else if CallbackOp::Modify.is_valid(snode) {
                        CallbackOp::Modify
                    } else {
                        continue;
                    };
                    add_change(&mut changes, dnode, operation);
                }
            }
            DataDiffOp::Delete => {
                if CallbackOp::Delete.is_valid(dnode.schema()) {
                    add_change(&mut changes, dnode, CallbackOp::Delete);
                } else {
                    add_np_container_deletes(&mut changes, dnode);
                }
            }
            DataDiffOp::Replace => {
                if CallbackOp::Modify.is_valid(dnode.schema()) {
                    add_change(&mut changes, dnode, CallbackOp::Modify);
                }
            }
        }
    }

    changes
}

fn add_change(
    changes: &mut ConfigChanges,
    dnode: DataNodeRef<'_>,
    operation: CallbackOp,
) {
    let cb_key = CallbackKey::new(dnode.schema().path.to_owned(), operation);
    changes.push((cb_key, dnode.path().to_owned()));
}

// NP-containers don't have delete callbacks, so look for the topmost
// deletable nodes under them.
fn add_np_container_deletes(changes: &mut ConfigChanges, dnode: DataNodeRef<'_>) {
    for dnode in dnode.children() {
        let snode = dnode.schema();
        if CallbackOp::Delete.is_valid(snode) {
            add_change(changes, dnode, CallbackOp::Delete);
        } else if snode.kind.is_np_container() {
            add_np_container_deletes(changes, dnode);
        }
    }
}
