//! 身份生成服务

use chrono::{DateTime, Local};
use idforge_core::{CoreResult, DomainChoice, IdentityGenerator, UserInfo};

/// 封装 idforge-core 的生成器，并记录生成时间
pub struct IdentityService {
    generator: IdentityGenerator,
}

/// 一次生成的结果
#[derive(Debug, Clone)]
pub struct GeneratedIdentity {
    pub info: UserInfo,
    pub generated_at: DateTime<Local>,
}

impl IdentityService {
    /// 使用系统熵源
    pub fn new() -> Self {
        Self {
            generator: IdentityGenerator::from_entropy(),
        }
    }

    /// 固定种子（测试用）
    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            generator: IdentityGenerator::from_seed(seed),
        }
    }

    /// 为指定国家生成一个完整身份
    pub fn generate(
        &mut self,
        country_code: &str,
        domain: &DomainChoice,
    ) -> CoreResult<GeneratedIdentity> {
        let info = self.generator.generate(country_code, domain)?;
        Ok(GeneratedIdentity {
            info,
            generated_at: Local::now(),
        })
    }
}

impl Default for IdentityService {
    fn default() -> Self {
        Self::new()
    }
}
