//! Model ↔ DTO mappers.
//!
//! Every mapper is a zero-sized type implementing [`Mapper`]. Mapping is pure
//! and total: no validation happens here, so a DTO always maps to a model and
//! back without loss.

pub mod converters;

use crate::dto::{
    AdmissionTypeDto, DeliveryResultTypeDto, ExamDto, ExamRowDto, ExamTypeDto,
};
use hms_core::{AdmissionType, DeliveryResultType, Exam, ExamRow, ExamType};

pub trait Mapper {
    type Model;
    type Dto;

    fn map_to_dto(&self, model: &Self::Model) -> Self::Dto;

    fn map_to_model(&self, dto: &Self::Dto) -> Self::Model;

    fn map_to_dto_list(&self, models: &[Self::Model]) -> Vec<Self::Dto> {
        models.iter().map(|m| self.map_to_dto(m)).collect()
    }

    fn map_to_model_list(&self, dtos: &[Self::Dto]) -> Vec<Self::Model> {
        dtos.iter().map(|d| self.map_to_model(d)).collect()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AdmissionTypeMapper;

impl Mapper for AdmissionTypeMapper {
    type Model = AdmissionType;
    type Dto = AdmissionTypeDto;

    fn map_to_dto(&self, model: &AdmissionType) -> AdmissionTypeDto {
        AdmissionTypeDto {
            code: model.code.clone(),
            description: model.description.clone(),
        }
    }

    fn map_to_model(&self, dto: &AdmissionTypeDto) -> AdmissionType {
        AdmissionType::new(dto.code.clone(), dto.description.clone())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DeliveryResultTypeMapper;

impl Mapper for DeliveryResultTypeMapper {
    type Model = DeliveryResultType;
    type Dto = DeliveryResultTypeDto;

    fn map_to_dto(&self, model: &DeliveryResultType) -> DeliveryResultTypeDto {
        DeliveryResultTypeDto {
            code: model.code.clone(),
            description: model.description.clone(),
        }
    }

    fn map_to_model(&self, dto: &DeliveryResultTypeDto) -> DeliveryResultType {
        DeliveryResultType::new(dto.code.clone(), dto.description.clone())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ExamTypeMapper;

impl Mapper for ExamTypeMapper {
    type Model = ExamType;
    type Dto = ExamTypeDto;

    fn map_to_dto(&self, model: &ExamType) -> ExamTypeDto {
        ExamTypeDto {
            code: model.code.clone(),
            description: model.description.clone(),
        }
    }

    fn map_to_model(&self, dto: &ExamTypeDto) -> ExamType {
        ExamType::new(dto.code.clone(), dto.description.clone())
    }
}

/// Maps exams, delegating the nested exam type to [`ExamTypeMapper`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ExamMapper;

impl Mapper for ExamMapper {
    type Model = Exam;
    type Dto = ExamDto;

    fn map_to_dto(&self, model: &Exam) -> ExamDto {
        ExamDto {
            code: model.code.clone(),
            description: model.description.clone(),
            examtype: ExamTypeMapper.map_to_dto(&model.exam_type),
            procedure: model.procedure,
            default_result: model.default_result.clone(),
        }
    }

    fn map_to_model(&self, dto: &ExamDto) -> Exam {
        Exam {
            code: dto.code.clone(),
            description: dto.description.clone(),
            exam_type: ExamTypeMapper.map_to_model(&dto.examtype),
            procedure: dto.procedure,
            default_result: dto.default_result.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ExamRowMapper;

impl Mapper for ExamRowMapper {
    type Model = ExamRow;
    type Dto = ExamRowDto;

    fn map_to_dto(&self, model: &ExamRow) -> ExamRowDto {
        ExamRowDto {
            code: model.code,
            exam_code: model.exam_code.clone(),
            description: model.description.clone(),
        }
    }

    fn map_to_model(&self, dto: &ExamRowDto) -> ExamRow {
        ExamRow {
            code: dto.code,
            exam_code: dto.exam_code.clone(),
            description: dto.description.clone(),
        }
    }
}
