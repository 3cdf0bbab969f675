//! Application context - dependency injection container

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use portico_core::{
    AnalyticsGateway, CommentsGateway, PaymentService, PaymentsGateway, ProjectsGateway,
    ReconcileService, SelectionMachine, ThreadService, TicketsGateway, UsersGateway,
};
use portico_domain::{Area, Config, RecordSet, Result, Viewer, Workspace};
use portico_infra::{
    AnalyticsApi, CommentsApi, PaymentsApi, PortalApi, PortalClient, PortalClientConfig,
    StaticTokenProvider,
};
use tracing::{debug, info};

/// Application context - holds all services and dependencies
///
/// One context lives for the lifetime of a signed-in session. Everything the
/// commands need hangs off it: the resolved viewer, the services wired to the
/// portal backend, and the mutable session state behind its lock.
pub struct AppContext {
    pub config: Config,
    pub viewer: Viewer,
    pub reconcile: ReconcileService,
    pub threads: ThreadService,
    pub payments: PaymentService,
    pub analytics: Arc<dyn AnalyticsGateway>,
    pub users: Arc<dyn UsersGateway>,

    session: Mutex<SessionState>,
}

/// Mutable per-session state shared by the commands
///
/// `records` is the only cache in the system; it is replaced wholesale on
/// every reload and never edited incrementally. `workspace` is the
/// role-scoped derivation of the same snapshot.
pub struct SessionState {
    pub(crate) records: RecordSet,
    pub(crate) workspace: Workspace,
    pub(crate) selections: [SelectionMachine; 4],
    pub(crate) drafts: HashMap<Area, String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            records: RecordSet::default(),
            workspace: Workspace::default(),
            selections: Area::all().map(SelectionMachine::new),
            drafts: HashMap::new(),
        }
    }
}

impl SessionState {
    /// The selection machine owning the given area's detail slot.
    ///
    /// Indexes into the fixed array in [`Area::all`] order, so every area
    /// always has exactly one machine.
    pub(crate) fn machine_mut(&mut self, area: Area) -> &mut SelectionMachine {
        let index = match area {
            Area::AdminProjects => 0,
            Area::AdminTickets => 1,
            Area::ClientProjects => 2,
            Area::ClientTickets => 3,
        };
        &mut self.selections[index]
    }

    pub(crate) fn machine(&self, area: Area) -> &SelectionMachine {
        let index = match area {
            Area::AdminProjects => 0,
            Area::AdminTickets => 1,
            Area::ClientProjects => 2,
            Area::ClientTickets => 3,
        };
        &self.selections[index]
    }
}

impl AppContext {
    /// Wires the real portal gateways from configuration.
    pub fn new(config: Config, viewer: Viewer) -> Result<Self> {
        let auth = Arc::new(StaticTokenProvider::new(config.api.token.clone()));
        let client = Arc::new(PortalClient::new(PortalClientConfig::from(&config.api), auth)?);
        let portal = Arc::new(PortalApi::new(Arc::clone(&client)));
        let comments = Arc::new(CommentsApi::new(Arc::clone(&client)));
        let payments = Arc::new(PaymentsApi::new(Arc::clone(&client)));
        let analytics = Arc::new(AnalyticsApi::new(client));

        Ok(Self::with_gateways(
            config,
            viewer,
            Arc::clone(&portal) as Arc<dyn TicketsGateway>,
            Arc::clone(&portal) as Arc<dyn ProjectsGateway>,
            portal,
            comments,
            payments,
            analytics,
        ))
    }

    /// Builds a context from process environment configuration.
    ///
    /// Environment overrides shipped in a `.env` file are honored when the
    /// file exists; a missing file is the normal production case.
    pub fn from_env(viewer: Viewer) -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => info!(path = %path.display(), "Loaded environment overrides"),
            Err(_) => debug!("No .env file found, using process environment"),
        }

        let config = portico_infra::config::load()?;
        Self::new(config, viewer)
    }

    /// Assembles a context from explicit gateway implementations.
    ///
    /// This is the seam tests use to substitute in-memory gateways; `new`
    /// goes through here with the real portal adapters.
    pub fn with_gateways(
        config: Config,
        viewer: Viewer,
        tickets: Arc<dyn TicketsGateway>,
        projects: Arc<dyn ProjectsGateway>,
        users: Arc<dyn UsersGateway>,
        comments: Arc<dyn CommentsGateway>,
        payments: Arc<dyn PaymentsGateway>,
        analytics: Arc<dyn AnalyticsGateway>,
    ) -> Self {
        let reconcile = ReconcileService::new(tickets, projects, Arc::clone(&users));
        let threads = ThreadService::new(comments).with_max_length(config.comments.max_length);
        let payments = PaymentService::new(payments);

        Self {
            config,
            viewer,
            reconcile,
            threads,
            payments,
            analytics,
            users,
            session: Mutex::new(SessionState::default()),
        }
    }

    /// Locks the per-session state.
    ///
    /// Commands do their network work first and apply the outcome under a
    /// short lock; the guard must not be held across an await point.
    pub(crate) fn session(&self) -> MutexGuard<'_, SessionState> {
        self.session.lock()
    }
}
