//! Temp-mail service directory

use crate::types::TempEmailEntry;

pub(crate) static TEMP_EMAIL_SERVICES: [TempEmailEntry; 15] = [
    TempEmailEntry {
        name: "YOPmail",
        url: "https://yopmail.com",
        description: "The most popular disposable inbox, no sign-up required",
        description_zh: "最受欢迎的临时邮箱服务,无需注册",
    },
    TempEmailEntry {
        name: "10 Minute Mail",
        url: "https://10minutemail.com",
        description: "Generates an address that stays valid for 10 minutes",
        description_zh: "自动生成10分钟有效的临时邮箱",
    },
    TempEmailEntry {
        name: "Temp Mail",
        url: "https://temp-mail.org",
        description: "Auto-generated temporary inbox with live delivery",
        description_zh: "自动生成临时邮箱,实时接收邮件",
    },
    TempEmailEntry {
        name: "Guerrilla Mail",
        url: "https://www.guerrillamail.com",
        description: "Anonymous temporary inbox that protects your privacy",
        description_zh: "匿名临时邮箱,保护隐私",
    },
    TempEmailEntry {
        name: "Mohmal",
        url: "https://www.mohmal.com",
        description: "Arabic-language temporary email service",
        description_zh: "阿拉伯语临时邮箱服务",
    },
    TempEmailEntry {
        name: "Maildrop",
        url: "https://maildrop.cc",
        description: "Simple and fast inbox, messages kept for 24 hours",
        description_zh: "简单快速的临时邮箱,24小时有效",
    },
    TempEmailEntry {
        name: "ThrowAwayMail",
        url: "https://www.throwawaymail.com",
        description: "Random throwaway addresses",
        description_zh: "随机生成临时邮箱地址",
    },
    TempEmailEntry {
        name: "EmailOnDeck",
        url: "https://www.emailondeck.com",
        description: "Quick temporary inbox supporting several addresses",
        description_zh: "快速临时邮箱,支持多个地址",
    },
    TempEmailEntry {
        name: "FakeMail",
        url: "https://www.fakemail.net",
        description: "Free temporary email generator",
        description_zh: "免费临时邮箱生成器",
    },
    TempEmailEntry {
        name: "TempMail.Plus",
        url: "https://tempmail.plus",
        description: "Advanced temporary email service",
        description_zh: "高级临时邮箱服务",
    },
    TempEmailEntry {
        name: "Mailinator",
        url: "https://www.mailinator.com",
        description: "Public temporary inbox system",
        description_zh: "公共临时邮箱系统",
    },
    TempEmailEntry {
        name: "Dispostable",
        url: "https://www.dispostable.com",
        description: "Disposable email addresses",
        description_zh: "可抛弃的临时邮箱",
    },
    TempEmailEntry {
        name: "Temp-Mail.io",
        url: "https://temp-mail.io",
        description: "Modern temporary inbox interface",
        description_zh: "现代化临时邮箱界面",
    },
    TempEmailEntry {
        name: "MailDrop",
        url: "https://maildrop.cc",
        description: "MailDrop temporary email service",
        description_zh: "MailDrop临时邮箱服务",
    },
    TempEmailEntry {
        name: "MailCatch",
        url: "https://mailcatch.com",
        description: "Catches temporary mail for you",
        description_zh: "捕获临时邮件的服务",
    },
];
