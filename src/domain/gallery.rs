//! Embedded example emails. Static browsing/prefill data for the UI.

use crate::domain::{Category, TextSubmission};

/// A curated example email with its known classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailExample {
    pub sender: &'static str,
    pub subject: &'static str,
    pub content: &'static str,
    pub classification: Category,
    /// Human-friendly grouping label ("Spam Promocional", ...).
    pub category_label: &'static str,
    pub date: &'static str,
}

impl EmailExample {
    /// Prefill a text-form draft from this example.
    pub fn to_submission(&self) -> TextSubmission {
        TextSubmission {
            sender_name: self.sender.to_string(),
            subject: self.subject.to_string(),
            email_content: self.content.to_string(),
        }
    }
}

/// The built-in gallery shown by the "browse examples" menu entry.
pub const EMAIL_EXAMPLES: &[EmailExample] = &[
    EmailExample {
        sender: "Ana Silva (Gerente de Projetos)",
        subject: "Reunião de Planejamento - Projeto Q4",
        content: "Olá equipe,\n\nGostaria de agendar uma reunião para discutir o cronograma do projeto Q4. Precisamos revisar os marcos principais e definir as responsabilidades.\n\nData sugerida: Sexta-feira às 14h\nDuração: 1h30min\nSala de reuniões: Sala A\n\nPor favor, confirmem presença até quinta-feira.\n\nObrigada,\nAna",
        classification: Category::Produtivo,
        category_label: "Reuniões de Trabalho",
        date: "15 Jan 2024",
    },
    EmailExample {
        sender: "João Oliveira (Diretor Financeiro)",
        subject: "Relatório Mensal de Vendas - Dezembro 2023",
        content: "Prezados,\n\nSegue em anexo o relatório consolidado de vendas de dezembro. Destaques:\n\n• Crescimento de 12% vs mês anterior\n• Meta mensal superada em 8%\n• Região Sul liderou em performance\n\nReunião de análise marcada para terça-feira às 10h para discussão dos resultados e planejamento de janeiro.\n\nSaúdes,\nJoão",
        classification: Category::Produtivo,
        category_label: "Relatórios Corporativos",
        date: "08 Jan 2024",
    },
    EmailExample {
        sender: "CarlosDeals@promogeral.com",
        subject: "🔥 SUPER OFERTA! 70% OFF em Eletrônicos!",
        content: "Não perca essa MEGA PROMOÇÃO!\n\n🎉 Smartphones com até 70% de desconto\n🎉 Notebooks a partir de R$ 999\n🎉 TVs Smart com frete GRÁTIS\n\nCORRA! Oferta válida apenas por 24 horas!\n\nClique AQUI e garante já o seu: www.promogeral.com/ofertas\n\nDescadastre-se aqui se não quiser mais receber.",
        classification: Category::Improdutivo,
        category_label: "Spam Promocional",
        date: "12 Jan 2024",
    },
    EmailExample {
        sender: "newsletter@techblog.com.br",
        subject: "Weekly Tech News - Edição #247",
        content: "Olá leitor!\n\nConfira as principais notícias da semana:\n\n- Lançamento do novo iPhone com IA integrada\n- Microsoft anuncia parceria com OpenAI\n- Tesla apresenta novo modelo autônomo\n- Criptomoedas em alta histórica\n\nLeia mais em nosso blog e compartilhe com seus amigos!\n\nAté semana que vem!",
        classification: Category::Improdutivo,
        category_label: "Newsletter Marketing",
        date: "10 Jan 2024",
    },
    EmailExample {
        sender: "Maria Santos (RH)",
        subject: "Convite: Treinamento de Liderança - Fevereiro",
        content: "Prezado(a),\n\nTemos o prazer de convidá-lo para o treinamento 'Liderança na Era Digital' que acontecerá nos dias 15 e 16 de fevereiro.\n\nPrograma:\n- Gestão de equipes remotas\n- Ferramentas de comunicação\n- Desenvolvimento de soft skills\n\nLocal: Auditório principal\nHorário: 9h às 17h\nInstrutor: Prof. Ricardo Mendes\n\nConfirme sua participação até o dia 31/01.\n\nAtenciosamente,\nMaria Santos - RH",
        classification: Category::Produtivo,
        category_label: "Eventos Corporativos",
        date: "20 Jan 2024",
    },
    EmailExample {
        sender: "Pedro Costa (pedro.costa@gmail.com)",
        subject: "Oi! Como você está?",
        content: "Oi amigo!\n\nTudo bem? Faz tempo que não nos falamos! Como estão as coisas aí no trabalho?\n\nEu aqui pensando em marcar um churrasco no final de semana. Que tal sábado à tarde na minha casa? Vai ter futebol na TV e cerveja gelada!\n\nMe avisa se você topa! Já falei com o pessoal da turma e alguns confirmaram.\n\nAbraços!\nPedro\n\nPS: Minha esposa mandou lembranças para sua família!",
        classification: Category::Improdutivo,
        category_label: "Email Pessoal",
        date: "18 Jan 2024",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::validate_text_submission;

    #[test]
    fn test_every_example_prefills_a_valid_draft() {
        for example in EMAIL_EXAMPLES {
            let draft = example.to_submission();
            assert!(
                validate_text_submission(&draft).is_empty(),
                "example {:?} should prefill a submittable draft",
                example.subject
            );
        }
    }
}
