pub mod u508_resume_chat;
