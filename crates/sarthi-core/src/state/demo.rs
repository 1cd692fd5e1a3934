//! Seeded demo state shown before any real data exists.

use chrono::{Duration, Utc};

use super::model::AppState;
use crate::interview::InterviewPrepData;
use crate::learning_path::{DailyTask, LearningPathData, TaskType, WeekPlan};
use crate::notification::{Notification, NotificationKind};
use crate::profile::UserProfile;
use crate::project_review::{ProjectReview, ReviewStatus};
use crate::skill_gap::{MissingSkill, Priority, SkillGapData};

pub const DEMO_ACTIVE_SECTION: &str = "dashboard";

const DEMO_CURRENT_WEEK: u32 = 3;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn task(day: &str, text: &str, task_type: TaskType, duration: &str, resource: &str, done: bool) -> DailyTask {
    DailyTask {
        day: day.to_string(),
        task: text.to_string(),
        task_type,
        duration: duration.to_string(),
        resource: resource.to_string(),
        completed: done,
    }
}

fn missing(skill: &str, priority: Priority, reason: &str, weeks: u32) -> MissingSkill {
    MissingSkill {
        skill: skill.to_string(),
        priority,
        reason: reason.to_string(),
        estimated_weeks: weeks,
    }
}

fn notification(id: &str, text: &str, kind: NotificationKind, read: bool, age: Duration) -> Notification {
    Notification {
        id: id.to_string(),
        text: text.to_string(),
        kind,
        read,
        created_at: Utc::now() - age,
    }
}

pub(crate) fn demo_user() -> UserProfile {
    UserProfile {
        name: "Vikas Sharma".to_string(),
        college: "Poornima University".to_string(),
        city: "Jaipur".to_string(),
        year: "3rd Year".to_string(),
        branch: "CS".to_string(),
        target_role: "Backend SDE".to_string(),
        target_companies: strings(&["Flipkart", "Razorpay", "Zerodha"]),
        current_skills: strings(&["Python", "Node.js", "MongoDB", "Git", "HTML/CSS", "JavaScript"]),
        github_url: "https://github.com/vikassharma".to_string(),
        avatar: "VS".to_string(),
        timeline: "3 months".to_string(),
    }
}

/// The canned analysis result, also returned by the simulated analyzer.
pub fn demo_skill_gap() -> SkillGapData {
    SkillGapData {
        analyzed: true,
        readiness_score: 62,
        current_level: "Intermediate".to_string(),
        estimated_weeks: 8,
        strong_skills: strings(&["Python", "Node.js", "MongoDB", "Git", "REST APIs"]),
        missing_skills: vec![
            missing("System Design", Priority::High, "Required for SDE-2 interviews", 4),
            missing("Docker & Kubernetes", Priority::High, "Production deployment standard", 3),
            missing("Redis & Caching", Priority::Medium, "Performance optimization layer", 2),
            missing("PostgreSQL", Priority::Medium, "Relational DB mastery needed", 2),
            missing("CI/CD Pipelines", Priority::Medium, "DevOps awareness expected", 1),
            missing("Unit Testing", Priority::Low, "Code quality signal for interviews", 1),
        ],
        summary: "You have solid fundamentals in backend development. Focus on system design \
                  patterns and DevOps tooling to become interview-ready for product companies."
            .to_string(),
        analyzed_at: Utc::now(),
    }
}

/// The canned six-week backend plan.
pub fn demo_weeks() -> Vec<WeekPlan> {
    use TaskType::{Code, Concept, Dsa, Project};

    vec![
        WeekPlan {
            week: 1,
            theme: "Backend Foundations & SQL".to_string(),
            completed: true,
            topics: strings(&["REST API Best Practices", "PostgreSQL Deep Dive", "ORM (Prisma/Sequelize)"]),
            daily_tasks: vec![
                task("Monday", "REST API Design Patterns", Concept, "2h", "https://restfulapi.net", true),
                task("Tuesday", "PostgreSQL Setup & Queries", Code, "3h", "https://www.postgresql.org/docs", true),
                task("Wednesday", "Two Sum & Valid Parentheses", Dsa, "2h", "LeetCode", true),
                task("Thursday", "Build CRUD API with Express", Project, "3h", "Express docs", true),
                task("Friday", "SQL Joins & Subqueries", Concept, "2h", "SQLBolt", true),
            ],
            dsa_topics: strings(&["Arrays", "Strings", "Hash Maps"]),
            weekly_project: "Build a RESTful Notes API with PostgreSQL".to_string(),
        },
        WeekPlan {
            week: 2,
            theme: "Authentication & Security".to_string(),
            completed: true,
            topics: strings(&["JWT Authentication", "OAuth 2.0", "Input Validation", "CORS & Helmet"]),
            daily_tasks: vec![
                task("Monday", "JWT Token Flow Deep Dive", Concept, "2h", "jwt.io", true),
                task("Tuesday", "Implement Auth Middleware", Code, "3h", "Node.js docs", true),
                task("Wednesday", "Linked List Problems", Dsa, "2h", "LeetCode", true),
                task("Thursday", "OAuth2 with Google Sign-In", Project, "3h", "Passport.js docs", true),
                task("Friday", "Security Best Practices", Concept, "2h", "OWASP", true),
            ],
            dsa_topics: strings(&["Linked Lists", "Stacks", "Queues"]),
            weekly_project: "Add JWT auth to Notes API".to_string(),
        },
        WeekPlan {
            week: 3,
            theme: "Caching & Performance".to_string(),
            completed: false,
            topics: strings(&["Redis Fundamentals", "Caching Strategies", "Rate Limiting", "Database Indexing"]),
            daily_tasks: vec![
                task("Monday", "Redis Data Structures", Concept, "2h", "redis.io", true),
                task("Tuesday", "Implement Redis Caching Layer", Code, "3h", "ioredis docs", true),
                task("Wednesday", "Binary Tree Traversals", Dsa, "2h", "LeetCode", false),
                task("Thursday", "Rate Limiter Middleware", Project, "3h", "express-rate-limit", false),
                task("Friday", "Database Indexing Strategies", Concept, "2h", "Use The Index, Luke", false),
            ],
            dsa_topics: strings(&["Trees", "Binary Search"]),
            weekly_project: "Add Redis caching + rate limiting to API".to_string(),
        },
        WeekPlan {
            week: 4,
            theme: "Docker & Containerization".to_string(),
            completed: false,
            topics: strings(&["Docker Basics", "Dockerfile Optimization", "Docker Compose", "Container Networking"]),
            daily_tasks: vec![
                task("Monday", "Docker Fundamentals", Concept, "2h", "Docker docs", false),
                task("Tuesday", "Dockerize the Notes API", Code, "3h", "Docker docs", false),
                task("Wednesday", "Graph BFS/DFS", Dsa, "2h", "LeetCode", false),
                task("Thursday", "Multi-container with Compose", Project, "3h", "Docker Compose docs", false),
                task("Friday", "Container Best Practices", Concept, "2h", "Hadolint", false),
            ],
            dsa_topics: strings(&["Graphs", "BFS", "DFS"]),
            weekly_project: "Dockerize full-stack app with Compose".to_string(),
        },
        WeekPlan {
            week: 5,
            theme: "System Design Basics".to_string(),
            completed: false,
            topics: strings(&["Load Balancing", "Horizontal Scaling", "Database Sharding", "Message Queues"]),
            daily_tasks: vec![
                task("Monday", "Scalability Patterns", Concept, "2h", "System Design Primer", false),
                task("Tuesday", "Design a URL Shortener", Code, "3h", "educative.io", false),
                task("Wednesday", "Dynamic Programming Intro", Dsa, "2h", "LeetCode", false),
                task("Thursday", "Message Queue with RabbitMQ", Project, "3h", "RabbitMQ tutorials", false),
                task("Friday", "CAP Theorem & Trade-offs", Concept, "2h", "Martin Kleppmann", false),
            ],
            dsa_topics: strings(&["Dynamic Programming", "Greedy"]),
            weekly_project: "Design Twitter Feed system (whiteboard)".to_string(),
        },
        WeekPlan {
            week: 6,
            theme: "CI/CD & Testing".to_string(),
            completed: false,
            topics: strings(&["GitHub Actions", "Unit Testing with Jest", "Integration Testing", "Deployment Strategies"]),
            daily_tasks: vec![
                task("Monday", "GitHub Actions Workflows", Concept, "2h", "GitHub docs", false),
                task("Tuesday", "Write Unit Tests with Jest", Code, "3h", "Jest docs", false),
                task("Wednesday", "Sliding Window Problems", Dsa, "2h", "LeetCode", false),
                task("Thursday", "CI Pipeline for Notes API", Project, "3h", "GitHub Actions", false),
                task("Friday", "Deployment to AWS EC2", Concept, "2h", "AWS docs", false),
            ],
            dsa_topics: strings(&["Sliding Window", "Two Pointers"]),
            weekly_project: "Full CI/CD pipeline + deploy Notes API".to_string(),
        },
    ]
}

fn demo_notifications() -> Vec<Notification> {
    use NotificationKind::{Info, Success, Warning};

    vec![
        notification("n1", "Your skill gap analysis is ready!", Success, false, Duration::minutes(2)),
        notification("n2", "Week 2 learning path completed 🎉", Success, false, Duration::hours(1)),
        notification("n3", "You've solved 47 DSA questions!", Info, true, Duration::days(1)),
        notification("n4", "Submission deadline in 7 days", Warning, false, Duration::hours(2)),
        notification("n5", "New system design resource added", Info, true, Duration::days(2)),
    ]
}

/// Builds the seeded state: a third-year backend aspirant halfway through a
/// six-week plan.
///
/// Progress is derived from the seeded tasks (12 of 30 done, 40%) rather than
/// hard-coded, so the demo already satisfies the progress invariant.
pub fn demo_state() -> AppState {
    AppState {
        user: demo_user(),
        skill_gap: demo_skill_gap(),
        learning_path: LearningPathData::from_weeks(demo_weeks(), DEMO_CURRENT_WEEK),
        project_reviews: vec![ProjectReview {
            id: "pr1".to_string(),
            project_name: "Django Todo App".to_string(),
            github_url: "https://github.com/vikassharma/django-todo".to_string(),
            tech_stack: strings(&["Python", "Django", "PostgreSQL"]),
            overall_score: 62,
            submitted_at: Utc::now() - Duration::days(2),
            status: ReviewStatus::Reviewed,
        }],
        interview_prep: InterviewPrepData {
            questions_attempted: 47,
            questions_solved: strings(&["q1", "q5", "q12", "q18", "q22"]),
            mock_sessions_completed: 3,
            weak_areas: strings(&["System Design", "Dynamic Programming"]),
            strong_areas: strings(&["Arrays", "Strings", "Hash Maps", "REST APIs"]),
        },
        onboarding_complete: true,
        active_section: DEMO_ACTIVE_SECTION.to_string(),
        notifications: demo_notifications(),
        mobile_menu_open: false,
    }
}
