//! Form conversation service orchestrating the agent conversations.
//!
//! Creation, editing and filling share one shape: forward the conversation to the
//! flow's agent, and only when its reply carries the completion marker ask the analysis
//! agent to structure the result and write it. Nothing spans the two phases; a failure
//! after the agents answered leaves the database untouched.

use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

use crate::server::{
    data::{form::FormRepository, submission::SubmissionRepository, user::UserRepository},
    error::AppError,
    model::{
        conversation::{AgentReply, Conversation, ConversationOutcome},
        form::{
            AnalyzeFormParam, CreateFormConversationParam, CreateFormParam, Form, FormDraft,
            FormConversationParam,
        },
        form_agent::{AnalysisKind, FormAgent},
        submission::{CreateSubmissionParam, Submission},
    },
    service::{form::FormService, form_agent::FormAgentClient},
    util::extract::extract_object,
};

/// Service driving create, edit, fill and analyze conversations with the form agents.
pub struct FormConversationService<'a> {
    db: &'a DatabaseConnection,
    agents: FormAgentClient<'a>,
}

impl<'a> FormConversationService<'a> {
    /// Creates a new FormConversationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `agents` - Client for the external form agents
    ///
    /// # Returns
    /// - `FormConversationService` - New service instance
    pub fn new(db: &'a DatabaseConnection, agents: FormAgentClient<'a>) -> Self {
        Self { db, agents }
    }

    /// Advances a form-creation conversation.
    ///
    /// # Arguments
    /// - `param` - Author id and the conversation so far
    ///
    /// # Returns
    /// - `Ok(ConversationOutcome::InProgress)` - Agent reply, nothing stored
    /// - `Ok(ConversationOutcome::Completed(Form))` - The newly created form
    /// - `Err(AppError::FormAgentErr)` - Creation or analysis agent not configured
    /// - `Err(AppError::NotFound)` - Author does not exist
    /// - `Err(AppError::BadRequest)` - Completed conversation too short to analyze
    /// - `Err(AppError::ReqwestErr)` - Agent unreachable or reply not JSON
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        param: CreateFormConversationParam,
    ) -> Result<ConversationOutcome<Form>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let form_repo = FormRepository::new(self.db);

        self.agents.require(&[FormAgent::Creation, FormAgent::Analysis])?;

        if user_repo.find_by_id(param.author_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let reply = self
            .agents
            .converse(FormAgent::Creation, &param.conversation)
            .await?;

        let analysis = match self
            .conclude(reply, &param.conversation, AnalysisKind::Create)
            .await?
        {
            ConversationOutcome::InProgress(reply) => {
                return Ok(ConversationOutcome::InProgress(reply))
            }
            ConversationOutcome::Completed(analysis) => analysis,
        };

        let draft = FormDraft::from_analysis(analysis);
        let form = form_repo
            .create(CreateFormParam {
                title: draft.title,
                author_id: param.author_id,
                fields: draft.fields,
            })
            .await?;

        tracing::info!("Created form {} for user {}", form.id, form.author_id);

        Ok(ConversationOutcome::Completed(form))
    }

    /// Advances a form-editing conversation, replacing the form's fields on completion.
    ///
    /// # Returns
    /// - `Ok(ConversationOutcome::InProgress)` - Agent reply, nothing stored
    /// - `Ok(ConversationOutcome::Completed(Form))` - The form with its new fields
    /// - `Err(AppError::NotFound)` - Form does not exist
    /// - Other errors as for [`FormConversationService::create`]
    pub async fn edit(
        &self,
        param: FormConversationParam,
    ) -> Result<ConversationOutcome<Form>, AppError> {
        let form_repo = FormRepository::new(self.db);

        self.agents.require(&[FormAgent::Editing, FormAgent::Analysis])?;

        let form = FormService::new(self.db).get_by_id(param.form_id).await?;

        let reply = self
            .agents
            .converse_with_fields(FormAgent::Editing, &param.conversation, &form.fields)
            .await?;

        let analysis = match self
            .conclude(reply, &param.conversation, AnalysisKind::Edit)
            .await?
        {
            ConversationOutcome::InProgress(reply) => {
                return Ok(ConversationOutcome::InProgress(reply))
            }
            ConversationOutcome::Completed(analysis) => analysis,
        };

        let fields = FormDraft::fields_from_analysis(analysis);
        let form = form_repo
            .update_fields(form.id, fields)
            .await?
            .ok_or_else(|| AppError::NotFound("Form not found".to_string()))?;

        tracing::info!("Updated fields of form {}", form.id);

        Ok(ConversationOutcome::Completed(form))
    }

    /// Advances a form-filling conversation, storing a submission on completion.
    ///
    /// # Returns
    /// - `Ok(ConversationOutcome::InProgress)` - Agent reply, nothing stored
    /// - `Ok(ConversationOutcome::Completed(Submission))` - The stored submission
    /// - `Err(AppError::NotFound)` - Form does not exist
    /// - Other errors as for [`FormConversationService::create`]
    pub async fn fill(
        &self,
        param: FormConversationParam,
    ) -> Result<ConversationOutcome<Submission>, AppError> {
        let submission_repo = SubmissionRepository::new(self.db);

        self.agents.require(&[FormAgent::Filling, FormAgent::Analysis])?;

        let form = FormService::new(self.db).get_by_id(param.form_id).await?;

        let reply = self
            .agents
            .converse_with_fields(FormAgent::Filling, &param.conversation, &form.fields)
            .await?;

        let data = match self
            .conclude(reply, &param.conversation, AnalysisKind::Fill)
            .await?
        {
            ConversationOutcome::InProgress(reply) => {
                return Ok(ConversationOutcome::InProgress(reply))
            }
            ConversationOutcome::Completed(data) => data,
        };

        let submission = submission_repo
            .create(CreateSubmissionParam {
                form_id: form.id,
                data,
            })
            .await?;

        tracing::info!("Stored submission {} for form {}", submission.id, form.id);

        Ok(ConversationOutcome::Completed(submission))
    }

    /// Asks the analysis agent a question about a form and its submissions.
    ///
    /// The question is followed by the form's title, fields and submission data as JSON.
    ///
    /// # Returns
    /// - `Ok(Value)` - The structured answer, or the raw answer if none could be extracted
    /// - `Err(AppError::NotFound)` - Form does not exist
    /// - `Err(AppError::FormAgentErr)` - Analysis agent not configured
    /// - `Err(AppError::ReqwestErr)` - Agent unreachable or reply not JSON
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn analyze(&self, param: AnalyzeFormParam) -> Result<Value, AppError> {
        let submission_repo = SubmissionRepository::new(self.db);

        let form = FormService::new(self.db).get_by_id(param.form_id).await?;
        let submissions = submission_repo.find_by_form(form.id).await?;

        self.agents.require(&[FormAgent::Analysis])?;

        let context = json!({
            "title": form.title,
            "fields": form.fields,
            "submissions": submissions
                .into_iter()
                .map(|submission| submission.data)
                .collect::<Vec<_>>(),
        });
        let query = format!("{}\n\nForm data:\n{}", param.query, context);

        let reply = self.agents.analyze(AnalysisKind::Analyze, &query).await?;

        Ok(extract_object(reply.into_content()))
    }

    /// Second phase of a conversation.
    ///
    /// Without the completion marker the raw reply is handed back untouched. With it, the
    /// second-to-last message goes to the analysis agent and its answer is extracted.
    async fn conclude(
        &self,
        reply: AgentReply,
        conversation: &Conversation,
        kind: AnalysisKind,
    ) -> Result<ConversationOutcome<Value>, AppError> {
        if !self.agents.is_complete(&reply) {
            return Ok(ConversationOutcome::InProgress(reply.into_inner()));
        }

        let query = conversation.analysis_query().ok_or_else(|| {
            AppError::BadRequest(
                "At least two messages are required to complete a conversation".to_string(),
            )
        })?;

        let analysis = self.agents.analyze(kind, query).await?;

        Ok(ConversationOutcome::Completed(extract_object(
            analysis.into_content(),
        )))
    }
}
